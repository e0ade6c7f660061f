//! Print the parsed command inventory without scanning any sources.
//!
//! Useful when a report run fails with an empty inventory: it shows exactly
//! which rows of the listing were understood.

use crate::core::{InventorySet, Result};
use crate::inventory::{load_inventory, CommandSource};
use colored::*;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryFormat {
    Terminal,
    Json,
}

#[derive(Serialize)]
struct InventoryListing<'a> {
    total: usize,
    commands: &'a InventorySet,
}

pub fn print_inventory<S: CommandSource + ?Sized, W: Write>(
    source: &S,
    format: InventoryFormat,
    out: &mut W,
) -> Result<usize> {
    let inventory = load_inventory(source)?;
    match format {
        InventoryFormat::Json => write_json(&inventory, out)?,
        InventoryFormat::Terminal => write_terminal(&inventory, out)?,
    }
    Ok(inventory.len())
}

fn write_json<W: Write>(inventory: &InventorySet, out: &mut W) -> Result<()> {
    let listing = InventoryListing {
        total: inventory.len(),
        commands: inventory,
    };
    serde_json::to_writer_pretty(&mut *out, &listing)?;
    writeln!(out)?;
    Ok(())
}

fn write_terminal<W: Write>(inventory: &InventorySet, out: &mut W) -> Result<()> {
    for record in inventory {
        let aliases: Vec<&str> = record.extra_aliases().collect();
        if aliases.is_empty() {
            writeln!(out, "{}", record.primary_name.bold())?;
        } else {
            writeln!(
                out,
                "{} {}",
                record.primary_name.bold(),
                format!("({})", aliases.join(", ")).dimmed()
            )?;
        }
    }
    writeln!(out)?;
    writeln!(out, "{} runnable commands", inventory.len().to_string().green())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::StaticCommandSource;
    use serde_json::Value;

    const LISTING: &str =
        "command,fullAliasesString\n\"fcli tool list\",\"fcli tool ls\"\n\"fcli config clear\",\"\"\n";

    #[test]
    fn test_terminal_listing() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let count =
            print_inventory(&StaticCommandSource::new(LISTING), InventoryFormat::Terminal, &mut out)
                .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 2);
        assert!(text.contains("fcli tool list (fcli tool ls)"));
        assert!(text.contains("fcli config clear\n"));
        assert!(text.contains("2 runnable commands"));
    }

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        print_inventory(&StaticCommandSource::new(LISTING), InventoryFormat::Json, &mut out)
            .unwrap();
        let json: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["total"], 2);
        assert_eq!(json["commands"][1]["primary_name"], "fcli config clear");
    }
}
