// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod inventory;
pub mod io;
pub mod matcher;
pub mod observability;
pub mod report;

// Re-export commonly used types
pub use crate::core::{CommandRecord, CoverageError, CoverageResult, InventorySet, Result};

pub use crate::config::{ReportOverrides, ReportSettings};

pub use crate::inventory::{
    load_inventory, parse_csv_line, parse_inventory, CommandSource, ProcessCommandSource,
    StaticCommandSource,
};

pub use crate::matcher::{expand_variants, match_inventory, SourceCorpus};

pub use crate::report::{CoverageReport, CoverageSummary};

pub use crate::io::output::{create_writer, write_report_file, ReportFormat, ReportWriter};

pub use crate::commands::{run_report, run_report_with_source, ReportOutcome};
