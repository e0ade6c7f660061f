use crate::config::ReportOverrides;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cmdcov")]
#[command(about = "Functional-test command coverage auditor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report which runnable commands are never invoked by the test sources
    Report {
        /// Target executable or jar that lists its commands
        #[arg(long)]
        artifact: Option<PathBuf>,

        /// Directory scanned for invocation strings
        #[arg(long = "source-root")]
        source_root: Option<PathBuf>,

        /// Report destination
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<ReportFormatArg>,

        /// Prefix stripped from aliases to form bare variants
        #[arg(long = "prefix")]
        invocation_prefix: Option<String>,

        /// Fail when coverage is below this percentage
        #[arg(long = "min-coverage")]
        min_coverage: Option<f64>,

        /// List aliases next to each uncovered command
        #[arg(long = "show-aliases")]
        show_aliases: bool,

        /// Java executable used to launch jar artifacts
        #[arg(long)]
        java: Option<PathBuf>,

        /// Skip the report entirely
        #[arg(long, env = "CMDCOV_SKIP")]
        skip: bool,

        /// Configuration file (defaults to the nearest .cmdcov.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the command inventory reported by the target
    Inventory {
        /// Target executable or jar that lists its commands
        #[arg(long)]
        artifact: Option<PathBuf>,

        /// Java executable used to launch jar artifacts
        #[arg(long)]
        java: Option<PathBuf>,

        /// Listing format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: InventoryFormatArg,

        /// Configuration file (defaults to the nearest .cmdcov.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ReportFormatArg {
    Html,
    Json,
    Markdown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InventoryFormatArg {
    Terminal,
    Json,
}

impl From<ReportFormatArg> for crate::io::ReportFormat {
    fn from(f: ReportFormatArg) -> Self {
        match f {
            ReportFormatArg::Html => crate::io::ReportFormat::Html,
            ReportFormatArg::Json => crate::io::ReportFormat::Json,
            ReportFormatArg::Markdown => crate::io::ReportFormat::Markdown,
        }
    }
}

impl From<InventoryFormatArg> for crate::commands::InventoryFormat {
    fn from(f: InventoryFormatArg) -> Self {
        match f {
            InventoryFormatArg::Terminal => crate::commands::InventoryFormat::Terminal,
            InventoryFormatArg::Json => crate::commands::InventoryFormat::Json,
        }
    }
}

/// Flags a `report` invocation supplied; unset flags defer to the config file.
#[allow(clippy::too_many_arguments)]
pub fn report_overrides(
    artifact: Option<PathBuf>,
    source_root: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<ReportFormatArg>,
    invocation_prefix: Option<String>,
    min_coverage: Option<f64>,
    show_aliases: bool,
    java: Option<PathBuf>,
    skip: bool,
) -> ReportOverrides {
    ReportOverrides {
        skip: skip.then_some(true),
        artifact,
        source_root,
        output,
        format: format.map(Into::into),
        invocation_prefix,
        min_coverage,
        show_aliases: show_aliases.then_some(true),
        java,
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
