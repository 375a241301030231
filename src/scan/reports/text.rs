//! Plain-text violations report

use super::{ReportGenerator, ReportMetadata};
use crate::scan::data::ScanResult;
use anyhow::Result;
use std::fmt::Write;

pub const REPORT_TITLE: &str = "TODO/FIXME/HACK Violations Report";
const SEPARATOR_WIDTH: usize = 50;

/// `path:line:KIND - text` per violation under a fixed header
///
/// Nothing time-dependent is written, so an unchanged tree always yields
/// the same bytes.
#[derive(Debug, Default)]
pub struct TextReportGenerator;

impl ReportGenerator for TextReportGenerator {
    fn generate(&self, result: &ScanResult, metadata: &ReportMetadata) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{REPORT_TITLE}")?;
        writeln!(out, "Generated: {} v{}", crate::PKG_NAME, metadata.tool_version)?;
        writeln!(out, "Total violations: {}", result.violation_count())?;
        writeln!(out, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(out)?;

        for violation in &result.violations {
            writeln!(out, "{}", violation.report_line())?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::data::{MarkerKind, ScanStats, Violation};

    fn metadata() -> ReportMetadata {
        ReportMetadata {
            tool_version: "1.2.3".to_string(),
            today: chrono::NaiveDate::from_ymd_opt(2025, 8, 27).unwrap(),
            report_path: None,
        }
    }

    #[test]
    fn test_text_report_layout() {
        let result = ScanResult::new(
            vec![
                Violation::new("src/a.rs", 3, MarkerKind::Todo, "// TODO: fix this later"),
                Violation::new("web/b.js", 10, MarkerKind::Hack, "/* hack */"),
            ],
            Vec::new(),
            ScanStats::new(),
        );

        let report = TextReportGenerator.generate(&result, &metadata()).unwrap();
        let expected = format!(
            "TODO/FIXME/HACK Violations Report\nGenerated: todo-sweeper v1.2.3\nTotal violations: 2\n{}\n\nsrc/a.rs:3:TODO - // TODO: fix this later\nweb/b.js:10:HACK - /* hack */\n",
            "=".repeat(50)
        );
        assert_eq!(report, expected);
    }
}
