use crate::core::Result;
use crate::io::output::ReportWriter;
use crate::report::CoverageReport;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    show_aliases: bool,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_aliases: false,
        }
    }

    pub fn with_aliases(mut self, show_aliases: bool) -> Self {
        self.show_aliases = show_aliases;
        self
    }

    fn write_header(&mut self, report: &CoverageReport) -> Result<()> {
        writeln!(self.writer, "# {}", report.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Generated: {}", report.timestamp())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &CoverageReport) -> Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Total runnable non-hidden commands | {} |",
            summary.total
        )?;
        writeln!(self.writer, "| Covered | {} |", summary.covered_count)?;
        writeln!(self.writer, "| Not covered | {} |", summary.uncovered_count)?;
        writeln!(self.writer, "| Coverage | {:.1}% |", summary.coverage_percent)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_gaps(&mut self, report: &CoverageReport) -> Result<()> {
        writeln!(self.writer, "## Uncovered Commands")?;
        writeln!(self.writer)?;
        if report.gaps.is_empty() {
            writeln!(self.writer, "All commands are covered.")?;
            return Ok(());
        }

        if self.show_aliases {
            writeln!(self.writer, "| Command | Aliases |")?;
            writeln!(self.writer, "|---------|---------|")?;
        } else {
            writeln!(self.writer, "| Command |")?;
            writeln!(self.writer, "|---------|")?;
        }
        for gap in &report.gaps {
            if self.show_aliases {
                let aliases = gap
                    .extra_aliases()
                    .map(|a| format!("`{}`", escape_cell(a)))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(
                    self.writer,
                    "| `{}` | {} |",
                    escape_cell(&gap.primary_name),
                    aliases
                )?;
            } else {
                writeln!(self.writer, "| `{}` |", escape_cell(&gap.primary_name))?;
            }
        }
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &CoverageReport) -> Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_gaps(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommandRecord, CoverageResult};
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn render(result: &CoverageResult, show_aliases: bool) -> String {
        let report = CoverageReport::new(result, Utc.with_ymd_and_hms(2026, 5, 6, 7, 8, 9).unwrap());
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .with_aliases(show_aliases)
            .write_report(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_markdown_summary_and_gap_table() {
        let result = CoverageResult {
            covered: BTreeSet::new(),
            gaps: vec![CommandRecord::new("fcli util var ls", ["fcli util var list"])],
            total: 1,
        };
        let md = render(&result, true);
        assert!(md.contains("| Coverage | 0.0% |"));
        assert!(md.contains("| `fcli util var ls` | `fcli util var list` |"));
    }

    #[test]
    fn test_markdown_reports_full_coverage() {
        let result = CoverageResult {
            covered: BTreeSet::from(["fcli tool list".to_string()]),
            gaps: Vec::new(),
            total: 1,
        };
        let md = render(&result, false);
        assert!(md.contains("| Coverage | 100.0% |"));
        assert!(md.contains("All commands are covered."));
    }
}
