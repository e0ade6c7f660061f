//! Coverage figures and the report model handed to writers.

use crate::core::{CommandRecord, CoverageResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "fcli Functional Test Command Coverage";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub total: usize,
    pub covered_count: usize,
    pub uncovered_count: usize,
    /// Percentage of covered commands, rounded to one decimal place
    pub coverage_percent: f64,
}

impl CoverageSummary {
    pub fn new(total: usize, covered_count: usize, uncovered_count: usize) -> Self {
        Self {
            total,
            covered_count,
            uncovered_count,
            coverage_percent: coverage_percent(covered_count, total),
        }
    }

    pub fn from_result(result: &CoverageResult) -> Self {
        Self::new(result.total, result.covered_count(), result.uncovered_count())
    }

    /// `C/T (P%) covered; U uncovered`
    pub fn summary_line(&self) -> String {
        format!(
            "{}/{} ({:.1}%) covered; {} uncovered",
            self.covered_count, self.total, self.coverage_percent, self.uncovered_count
        )
    }
}

/// `covered / total * 100` rounded half away from zero to one decimal.
///
/// Inventories are never empty by the time coverage is computed; a zero total
/// still returns `0.0` rather than NaN.
pub fn coverage_percent(covered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = covered as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub title: String,
    pub summary: CoverageSummary,
    /// Uncovered commands in lexicographic order of primary name
    pub gaps: Vec<CommandRecord>,
    pub generated_at: DateTime<Utc>,
}

impl CoverageReport {
    pub fn new(result: &CoverageResult, generated_at: DateTime<Utc>) -> Self {
        let mut gaps = result.gaps.clone();
        gaps.sort_by(|a, b| a.primary_name.cmp(&b.primary_name));
        Self {
            title: DEFAULT_TITLE.to_string(),
            summary: CoverageSummary::from_result(result),
            gaps,
            generated_at,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
