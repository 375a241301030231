//! JSON report

use super::{ReportGenerator, ReportMetadata};
use crate::scan::data::{Exemption, ScanResult, ScanStats, Violation};
use crate::scan::filters::content::AnnotationStatus;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct JsonReportGenerator;

#[derive(Serialize)]
struct JsonReport<'a> {
    tool_version: &'a str,
    passed: bool,
    total_violations: usize,
    violations: &'a [Violation],
    exemptions: Vec<JsonExemption<'a>>,
    stats: &'a ScanStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_path: Option<&'a PathBuf>,
}

#[derive(Serialize)]
struct JsonExemption<'a> {
    #[serde(flatten)]
    exemption: &'a Exemption,
    status: AnnotationStatus,
}

impl ReportGenerator for JsonReportGenerator {
    fn generate(&self, result: &ScanResult, metadata: &ReportMetadata) -> Result<String> {
        let report = JsonReport {
            tool_version: &metadata.tool_version,
            passed: result.passed(),
            total_violations: result.violation_count(),
            violations: &result.violations,
            exemptions: result
                .exemptions
                .iter()
                .map(|exemption| JsonExemption {
                    exemption,
                    status: exemption.status(metadata.today),
                })
                .collect(),
            stats: &result.stats,
            report_path: metadata.report_path.as_ref(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::data::MarkerKind;
    use crate::scan::filters::content::ExceptionAnnotation;
    use chrono::NaiveDate;

    #[test]
    fn test_json_document() {
        let annotation =
            ExceptionAnnotation::parse("// ALLOWTODO: OPS-1 2025-01-01 Waiting on upstream fix").unwrap();
        let result = ScanResult::new(
            vec![Violation::new("src/a.rs", 3, MarkerKind::Fixme, "// FIXME")],
            vec![Exemption {
                file_path: "src/b.rs".to_string(),
                line_number: 9,
                annotation,
            }],
            ScanStats::new(),
        );
        let metadata = ReportMetadata {
            tool_version: "0.0.1".to_string(),
            today: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            report_path: None,
        };

        let json = JsonReportGenerator.generate(&result, &metadata).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["passed"], false);
        assert_eq!(value["total_violations"], 1);
        assert_eq!(value["violations"][0]["kind"], "FIXME");
        assert_eq!(value["violations"][0]["line_number"], 3);
        assert_eq!(value["exemptions"][0]["ticket"], "OPS-1");
        assert_eq!(value["exemptions"][0]["status"], "expired");
        assert!(value.get("report_path").is_none());
        assert!(value["stats"].get("files_scanned").is_some());
    }
}
