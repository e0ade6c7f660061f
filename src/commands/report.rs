//! The coverage report pipeline: inventory, corpus scan, report.
//!
//! Architecture follows the "pure core, imperative shell" split: matching
//! and summarising are pure, while process invocation, corpus reads and the
//! report write happen here at the edges.

use crate::config::ReportSettings;
use crate::core::{CoverageError, CoverageResult, Result};
use crate::inventory::{load_inventory, CommandSource, ProcessCommandSource};
use crate::io::write_report_file;
use crate::matcher::{match_inventory, SourceCorpus};
use crate::report::{CoverageReport, CoverageSummary};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::info;

/// What a report run did
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// `skip` was set; nothing was invoked, scanned or written
    Skipped,
    Completed {
        summary: CoverageSummary,
        result: CoverageResult,
        output: PathBuf,
    },
}

/// Run the full pipeline against the configured artifact.
pub fn run_report(settings: &ReportSettings) -> Result<ReportOutcome> {
    if settings.skip {
        log_skip();
        return Ok(ReportOutcome::Skipped);
    }

    let source = ProcessCommandSource::new(settings.require_artifact()?.clone())
        .with_java(settings.java.clone())
        .with_args(settings.list_args.clone());
    run_report_with_source(settings, &source, Utc::now())
}

/// Run the pipeline with an injected command source and timestamp.
pub fn run_report_with_source<S: CommandSource + ?Sized>(
    settings: &ReportSettings,
    source: &S,
    generated_at: DateTime<Utc>,
) -> Result<ReportOutcome> {
    if settings.skip {
        log_skip();
        return Ok(ReportOutcome::Skipped);
    }

    let inventory = load_inventory(source)?;
    let corpus = SourceCorpus::load(&settings.source_root)?;
    info!(
        root = %settings.source_root.display(),
        files = corpus.len(),
        "Scanning source corpus"
    );

    let result = match_inventory(&inventory, &corpus, &settings.invocation_prefix);
    let report = CoverageReport::new(&result, generated_at).with_title(settings.title.clone());
    write_report_file(
        &settings.output,
        settings.format,
        &report,
        settings.show_aliases,
    )?;

    let summary = report.summary;
    info!(
        "Functional test command coverage report written to: {}",
        settings.output.display()
    );
    info!("Coverage summary: {}", summary.summary_line());

    if let Some(required) = settings.min_coverage {
        if summary.coverage_percent < required {
            return Err(CoverageError::BelowThreshold {
                actual: summary.coverage_percent,
                required,
            });
        }
    }

    Ok(ReportOutcome::Completed {
        summary,
        result,
        output: settings.output.clone(),
    })
}

fn log_skip() {
    info!("Skipping command coverage report (skip=true)");
}
