use crate::core::{CommandRecord, Result};
use crate::io::output::ReportWriter;
use crate::report::CoverageReport;
use html_escape::encode_text;
use std::io::Write;

/// Renders a self-contained HTML page with inlined styling.
pub struct HtmlWriter<W: Write> {
    writer: W,
    template: &'static str,
    show_aliases: bool,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: include_str!("templates/coverage.html"),
            show_aliases: false,
        }
    }

    pub fn with_aliases(mut self, show_aliases: bool) -> Self {
        self.show_aliases = show_aliases;
        self
    }

    fn render_html(&self, report: &CoverageReport) -> String {
        let summary = &report.summary;
        let header_cells = if self.show_aliases {
            "<th>Command</th><th>Aliases</th>"
        } else {
            "<th>Command</th>"
        };
        let rows = if report.gaps.is_empty() {
            let span = if self.show_aliases { 2 } else { 1 };
            format!(r#"<tr><td class="none" colspan="{span}">All commands are covered.</td></tr>"#)
        } else {
            report
                .gaps
                .iter()
                .map(|gap| self.render_row(gap))
                .collect::<Vec<_>>()
                .join("\n")
        };

        // Gap rows go in last so command text is never rescanned for placeholders
        self.template
            .replace("{{{TITLE}}}", &encode_text(&report.title))
            .replace("{{{TOTAL}}}", &summary.total.to_string())
            .replace("{{{COVERED}}}", &summary.covered_count.to_string())
            .replace("{{{UNCOVERED}}}", &summary.uncovered_count.to_string())
            .replace("{{{PERCENT}}}", &format!("{:.1}", summary.coverage_percent))
            .replace("{{{TIMESTAMP}}}", &report.timestamp())
            .replace("{{{HEADER_CELLS}}}", header_cells)
            .replace("{{{GAP_ROWS}}}", &rows)
    }

    fn render_row(&self, gap: &CommandRecord) -> String {
        let command = format!("<td><code>{}</code></td>", encode_text(&gap.primary_name));
        if !self.show_aliases {
            return format!("<tr>{command}</tr>");
        }
        let aliases = gap
            .extra_aliases()
            .map(|a| format!("<code>{}</code>", encode_text(a)))
            .collect::<Vec<_>>()
            .join(" ");
        format!("<tr>{command}<td>{aliases}</td></tr>")
    }
}

impl<W: Write> ReportWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &CoverageReport) -> Result<()> {
        let html = self.render_html(report);
        self.writer.write_all(html.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
