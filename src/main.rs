use anyhow::{Context, Result};
use cmdcov::cli::{report_overrides, Commands};
use cmdcov::commands::{self, ReportOutcome};
use cmdcov::config::{load_config, ReportOverrides, ReportSettings};
use cmdcov::inventory::ProcessCommandSource;
use cmdcov::observability::init_logging;
use cmdcov::report::CoverageSummary;
use colored::*;
use std::path::PathBuf;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cmdcov::cli::parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Report {
            artifact,
            source_root,
            output,
            format,
            invocation_prefix,
            min_coverage,
            show_aliases,
            java,
            skip,
            config,
        } => {
            let overrides = report_overrides(
                artifact,
                source_root,
                output,
                format,
                invocation_prefix,
                min_coverage,
                show_aliases,
                java,
                skip,
            );
            handle_report_command(overrides, config)
        }
        Commands::Inventory {
            artifact,
            java,
            format,
            config,
        } => handle_inventory_command(artifact, java, format.into(), config),
        Commands::Init { force } => commands::init_config(force),
    }
}

fn resolve_settings(overrides: ReportOverrides, config: Option<PathBuf>) -> Result<ReportSettings> {
    let loaded = load_config(config.as_deref())?;
    if let Some(source) = &loaded.source {
        tracing::debug!("Using configuration from {}", source.display());
    }
    Ok(ReportSettings::resolve(overrides, loaded.config)?)
}

fn handle_report_command(overrides: ReportOverrides, config: Option<PathBuf>) -> Result<()> {
    let settings = resolve_settings(overrides, config)?;

    match commands::run_report(&settings).context("Command coverage report failed")? {
        ReportOutcome::Skipped => {}
        ReportOutcome::Completed {
            summary, output, ..
        } => print_summary(&summary, &output),
    }
    Ok(())
}

fn handle_inventory_command(
    artifact: Option<PathBuf>,
    java: Option<PathBuf>,
    format: commands::InventoryFormat,
    config: Option<PathBuf>,
) -> Result<()> {
    let overrides = ReportOverrides {
        artifact,
        java,
        ..Default::default()
    };
    let settings = resolve_settings(overrides, config)?;

    let source = ProcessCommandSource::new(settings.require_artifact()?.clone())
        .with_java(settings.java.clone())
        .with_args(settings.list_args.clone());
    let stdout = std::io::stdout();
    commands::print_inventory(&source, format, &mut stdout.lock())
        .context("Failed to list commands")?;
    Ok(())
}

fn print_summary(summary: &CoverageSummary, output: &std::path::Path) {
    let pct = format!("{:.1}%", summary.coverage_percent);
    let pct = if summary.uncovered_count == 0 {
        pct.green().bold()
    } else {
        pct.yellow().bold()
    };
    println!(
        "Command coverage: {} ({}/{} covered, {} uncovered)",
        pct,
        summary.covered_count.to_string().green(),
        summary.total,
        summary.uncovered_count.to_string().red()
    );
    println!("Report: {}", output.display());
}
