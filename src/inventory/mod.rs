//! Command inventory loading.
//!
//! Obtains the CSV listing of runnable, non-hidden commands from the target
//! tool and turns it into an [`InventorySet`].

pub mod csv;
pub mod source;

pub use csv::{parse_csv_line, parse_inventory};
pub use source::{
    verify_artifact, CommandSource, ProcessCommandSource, StaticCommandSource, DEFAULT_LIST_ARGS,
};

use crate::core::{InventorySet, Result};
use tracing::info;

/// Run the listing and parse its output.
pub fn load_inventory<S: CommandSource + ?Sized>(source: &S) -> Result<InventorySet> {
    let output = source.list_commands()?;
    let inventory = parse_inventory(&output)?;
    info!(
        source = %source.describe(),
        commands = inventory.len(),
        "Loaded command inventory"
    );
    Ok(inventory)
}
