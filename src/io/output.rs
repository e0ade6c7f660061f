use crate::core::{CoverageError, Result};
use crate::io::writers::{HtmlWriter, JsonWriter, MarkdownWriter};
use crate::report::CoverageReport;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
        }
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &CoverageReport) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: ReportFormat,
    writer: W,
    show_aliases: bool,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        ReportFormat::Html => Box::new(HtmlWriter::new(writer).with_aliases(show_aliases)),
        ReportFormat::Json => Box::new(JsonWriter::new(writer)),
        ReportFormat::Markdown => Box::new(MarkdownWriter::new(writer).with_aliases(show_aliases)),
    }
}

/// Render `report` to `path`, creating missing parent directories.
pub fn write_report_file(
    path: &Path,
    format: ReportFormat,
    report: &CoverageReport,
    show_aliases: bool,
) -> Result<()> {
    let write_err = |source: std::io::Error| CoverageError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let file = fs::File::create(path).map_err(write_err)?;
    let mut writer = create_writer(format, BufWriter::new(file), show_aliases);
    writer.write_report(report).map_err(|e| match e {
        CoverageError::Io(source) => write_err(source),
        other => other,
    })
}
