use crate::core::Result;
use crate::io::output::ReportWriter;
use crate::report::CoverageReport;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &CoverageReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CommandRecord, CoverageResult};
    use chrono::{TimeZone, Utc};
    use serde_json::Value;
    use std::collections::BTreeSet;

    #[test]
    fn test_json_report_structure() {
        let result = CoverageResult {
            covered: BTreeSet::from(["fcli tool list".to_string()]),
            gaps: vec![CommandRecord::new("fcli fod app ls", ["fcli fod app list"])],
            total: 2,
        };
        let report = CoverageReport::new(&result, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();
        let json: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(json["summary"]["total"], 2);
        assert_eq!(json["summary"]["covered_count"], 1);
        assert_eq!(json["summary"]["coverage_percent"], 50.0);
        assert_eq!(json["gaps"][0]["primary_name"], "fcli fod app ls");
        assert_eq!(json["gaps"][0]["aliases"].as_array().unwrap().len(), 2);
        assert!(json["generated_at"].as_str().unwrap().starts_with("2026-03-01"));
    }
}
