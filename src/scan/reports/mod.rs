//! Reporting
//!
//! Renders a [`ScanResult`] as the persisted plain-text report, a JSON
//! document, or the console summary.

use crate::scan::data::ScanResult;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Core reporting trait - allows pluggable report formats
pub trait ReportGenerator {
    /// Generate report content as a string
    fn generate(&self, result: &ScanResult, metadata: &ReportMetadata) -> Result<String>;
}

/// Run details that are not part of the scan result itself
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    pub tool_version: String,
    /// Reference day for exemption expiry
    pub today: NaiveDate,
    /// Where the text report was written, if it was
    pub report_path: Option<PathBuf>,
}

impl ReportMetadata {
    pub fn new(report_path: Option<PathBuf>) -> Self {
        Self {
            tool_version: crate::VERSION.to_string(),
            today: chrono::Local::now().date_naive(),
            report_path,
        }
    }
}

/// Write `content` to `path`, creating parent directories, replacing any previous file
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write report {}", path.display()))?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

mod json;
mod summary;
mod text;

pub use json::JsonReportGenerator;
pub use summary::{ConsoleSummary, banner};
pub use text::TextReportGenerator;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_report_creates_parents_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports/nested/todos.txt");

        write_report(&path, "first").unwrap();
        write_report(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
