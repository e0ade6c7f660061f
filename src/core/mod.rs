//! Core data model shared by the loader, matcher and reporter.

pub mod errors;
pub mod types;

pub use errors::{CoverageError, Result};
pub use types::{CommandRecord, CoverageResult, InventorySet};
