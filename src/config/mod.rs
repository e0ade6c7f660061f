//! Configuration for coverage runs.
//!
//! Values come from three layers with fixed precedence: command-line flags,
//! then `.cmdcov.toml`, then built-in defaults. The merged result is a
//! [`ReportSettings`] passed explicitly to the report entry point.

mod core;
mod loader;

pub use self::core::{CmdcovConfig, InvocationConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_file, parse_config,
    LoadedConfig, CONFIG_FILE_NAME,
};

use crate::core::{CoverageError, Result};
use crate::inventory::DEFAULT_LIST_ARGS;
use crate::io::ReportFormat;
use crate::matcher::DEFAULT_INVOCATION_PREFIX;
use crate::report::DEFAULT_TITLE;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_ROOT: &str = "src";
pub const DEFAULT_REPORT_DIR: &str = "build/reports/commandCoverage";
pub const DEFAULT_REPORT_STEM: &str = "functional-test-command-coverage";

/// Values supplied on the command line; `None` defers to the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOverrides {
    pub skip: Option<bool>,
    pub artifact: Option<PathBuf>,
    pub source_root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<ReportFormat>,
    pub invocation_prefix: Option<String>,
    pub min_coverage: Option<f64>,
    pub show_aliases: Option<bool>,
    pub java: Option<PathBuf>,
}

/// Fully resolved settings for one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub skip: bool,
    /// Required unless `skip` is set
    pub artifact: Option<PathBuf>,
    pub java: Option<PathBuf>,
    pub list_args: Vec<String>,
    pub source_root: PathBuf,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub invocation_prefix: String,
    pub min_coverage: Option<f64>,
    pub show_aliases: bool,
    pub title: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        let format = ReportFormat::default();
        Self {
            skip: false,
            artifact: None,
            java: None,
            list_args: DEFAULT_LIST_ARGS.iter().map(|s| s.to_string()).collect(),
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            output: default_output(format),
            format,
            invocation_prefix: DEFAULT_INVOCATION_PREFIX.to_string(),
            min_coverage: None,
            show_aliases: false,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ReportSettings {
    pub fn resolve(overrides: ReportOverrides, file: CmdcovConfig) -> Result<Self> {
        let invocation = file.invocation.unwrap_or_default();
        let format = overrides.format.or(file.format).unwrap_or_default();
        let min_coverage = overrides.min_coverage.or(file.min_coverage);
        validate_min_coverage(min_coverage)?;

        let list_args = invocation
            .args
            .unwrap_or_else(|| DEFAULT_LIST_ARGS.iter().map(|s| s.to_string()).collect());
        if list_args.is_empty() {
            return Err(CoverageError::config(
                "invocation.args must not be empty",
            ));
        }

        Ok(Self {
            skip: overrides.skip.or(file.skip).unwrap_or(false),
            artifact: overrides.artifact.or(file.artifact),
            java: overrides.java.or(invocation.java),
            list_args,
            source_root: overrides
                .source_root
                .or(file.source_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_ROOT)),
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(|| default_output(format)),
            format,
            invocation_prefix: overrides
                .invocation_prefix
                .or(file.invocation_prefix)
                .unwrap_or_else(|| DEFAULT_INVOCATION_PREFIX.to_string()),
            min_coverage,
            show_aliases: overrides.show_aliases.or(file.show_aliases).unwrap_or(false),
            title: file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
    }

    /// The artifact path, or a configuration error when none was given
    pub fn require_artifact(&self) -> Result<&PathBuf> {
        self.artifact.as_ref().ok_or_else(|| {
            CoverageError::config("no command artifact configured; pass --artifact or set `artifact`")
        })
    }
}

fn default_output(format: ReportFormat) -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_DIR).join(format!("{}.{}", DEFAULT_REPORT_STEM, format.extension()))
}

fn validate_min_coverage(min_coverage: Option<f64>) -> Result<()> {
    match min_coverage {
        Some(pct) if !(0.0..=100.0).contains(&pct) => Err(CoverageError::config(format!(
            "min_coverage must be between 0 and 100, got {pct}"
        ))),
        _ => Ok(()),
    }
}
