//! CLI command implementations for cmdcov.
//!
//! Available commands:
//! - **report**: Compute command coverage and write the report
//! - **inventory**: Print the parsed command listing of the target tool
//! - **init**: Initialize a new cmdcov configuration file

pub mod init;
pub mod inventory;
pub mod report;

pub use init::init_config;
pub use inventory::{print_inventory, InventoryFormat};
pub use report::{run_report, run_report_with_source, ReportOutcome};
