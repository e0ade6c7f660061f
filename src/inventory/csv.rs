//! Parsing of the `command,fullAliasesString` CSV listing.
//!
//! The listing is produced by the target tool, so the parser is tolerant:
//! lines that do not have the expected shape are skipped rather than treated
//! as errors, which keeps stray log output mixed into the captured stream
//! from aborting a run.

use crate::core::{CommandRecord, CoverageError, InventorySet, Result};
use tracing::debug;

const QUOTE: char = '"';
const DELIMITER: char = ',';

/// Parse one data row into a command record.
///
/// Returns `None` for lines that are not shaped like
/// `"<primary>","<alias,alias,...>"`.
pub fn parse_csv_line(raw: &str) -> Option<CommandRecord> {
    let line = raw.trim().trim_end_matches(DELIMITER).trim_end();
    if !line.starts_with(QUOTE) {
        return None;
    }

    let closing = line[1..].find(QUOTE)? + 1;
    if closing <= 1 {
        return None;
    }
    let primary = &line[1..closing];

    let rest = &line[closing + 1..];
    let aliases = rest
        .strip_prefix(DELIMITER)
        .and_then(|remainder| quoted_field(remainder.trim()))
        .map(split_aliases)
        .unwrap_or_default();

    Some(CommandRecord::new(primary, aliases))
}

/// Contents of a field that starts and ends with a quote
fn quoted_field(field: &str) -> Option<&str> {
    if field.len() >= 2 && field.starts_with(QUOTE) && field.ends_with(QUOTE) {
        Some(&field[1..field.len() - 1])
    } else {
        None
    }
}

fn split_aliases(field: &str) -> Vec<String> {
    field
        .split(DELIMITER)
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the full captured output of the listing command.
///
/// Blank lines are ignored and the first remaining line is always treated as
/// the header, whatever it contains.
pub fn parse_inventory(output: &str) -> Result<InventorySet> {
    let lines: Vec<&str> = output.lines().filter(|l| !l.trim().is_empty()).collect();
    let Some((header, rows)) = lines.split_first() else {
        return Err(CoverageError::empty_inventory(
            "no output from the command listing; cannot compute coverage",
        ));
    };
    debug!(header = %header, rows = rows.len(), "Parsing command listing");

    let mut skipped = 0usize;
    let inventory: InventorySet = rows
        .iter()
        .filter_map(|row| {
            let parsed = parse_csv_line(row);
            if parsed.is_none() {
                skipped += 1;
                debug!(line = %row, "Skipping unparseable listing line");
            }
            parsed
        })
        .collect();

    if inventory.is_empty() {
        return Err(CoverageError::empty_inventory(format!(
            "parsed zero commands from {} line(s); CSV format may have changed",
            rows.len()
        )));
    }

    debug!(
        commands = inventory.len(),
        skipped, "Parsed command inventory"
    );
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn aliases(record: &CommandRecord) -> Vec<&str> {
        record.aliases.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_parses_primary_and_aliases() {
        let record = parse_csv_line(r#""fcli ssc issue list","fcli ssc issue ls,issues ls""#)
            .expect("well-formed line");
        assert_eq!(record.primary_name, "fcli ssc issue list");
        assert_eq!(
            aliases(&record),
            vec!["fcli ssc issue list", "fcli ssc issue ls", "issues ls"]
        );
    }

    #[test]
    fn test_trailing_commas_and_whitespace_are_trimmed() {
        let record = parse_csv_line("  \"fcli tool list\",\"fcli tool ls\",,  ").unwrap();
        assert_eq!(aliases(&record), vec!["fcli tool list", "fcli tool ls"]);
    }

    #[test]
    fn test_primary_only_line() {
        let record = parse_csv_line(r#""fcli config clear""#).unwrap();
        assert_eq!(aliases(&record), vec!["fcli config clear"]);
    }

    #[test]
    fn test_malformed_secondary_field_yields_no_aliases() {
        let record = parse_csv_line(r#""fcli fod app list","fcli fod app ls"#).unwrap();
        assert_eq!(aliases(&record), vec!["fcli fod app list"]);

        let record = parse_csv_line(r#""fcli fod app list" "ls""#).unwrap();
        assert_eq!(aliases(&record), vec!["fcli fod app list"]);
    }

    #[test]
    fn test_unquoted_and_empty_primary_lines_are_skipped() {
        assert!(parse_csv_line("WARN: something happened").is_none());
        assert!(parse_csv_line(r#""","ls""#).is_none());
        assert!(parse_csv_line(r#""unterminated"#).is_none());
        assert!(parse_csv_line("").is_none());
    }

    #[test]
    fn test_blank_aliases_are_dropped() {
        let record = parse_csv_line(r#""fcli util sleep"," , ,sleep ""#).unwrap();
        assert_eq!(aliases(&record), vec!["fcli util sleep", "sleep"]);
    }

    #[test]
    fn test_parse_inventory_discards_header_and_noise() {
        let output = indoc! {r#"
            Command,Full aliases string

            "fcli ssc appversion list","fcli ssc av ls"
            Picked up JAVA_TOOL_OPTIONS: -Xmx1g
            "fcli fod release list","fcli fod rel ls",
        "#};
        let inventory = parse_inventory(output).unwrap();
        let names: Vec<&str> = inventory.iter().map(|r| r.primary_name.as_str()).collect();
        assert_eq!(names, vec!["fcli ssc appversion list", "fcli fod release list"]);
    }

    #[test]
    fn test_single_data_line_is_treated_as_header() {
        let err = parse_inventory("\"util all-commands ls\",\"ls\"\n").unwrap_err();
        assert!(matches!(err, CoverageError::EmptyInventory { .. }));
    }

    #[test]
    fn test_empty_output_is_rejected() {
        let err = parse_inventory("\n   \n").unwrap_err();
        match err {
            CoverageError::EmptyInventory { reason } => assert!(reason.contains("no output")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_parsed_records_is_rejected() {
        let err = parse_inventory("command,fullAliasesString\nnot csv\n").unwrap_err();
        match err {
            CoverageError::EmptyInventory { reason } => assert!(reason.contains("zero commands")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
