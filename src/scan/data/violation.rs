//! Reportable violations and approved exemptions

use super::MarkerKind;
use crate::scan::filters::content::{AnnotationStatus, ExceptionAnnotation};
use chrono::NaiveDate;
use serde::Serialize;

/// One marker occurrence that survived every suppression rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Root-relative path with `/` separators
    pub file_path: String,

    /// Line number (1-indexed)
    pub line_number: usize,

    pub kind: MarkerKind,

    /// Trimmed line text, never truncated here
    pub line_content: String,
}

impl Violation {
    pub fn new(file_path: impl Into<String>, line_number: usize, kind: MarkerKind, line_content: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line_number,
            kind,
            line_content: line_content.into(),
        }
    }

    /// `path:line:KIND - text`, the persisted report format
    pub fn report_line(&self) -> String {
        format!(
            "{}:{}:{} - {}",
            self.file_path, self.line_number, self.kind, self.line_content
        )
    }

    /// Line text cut to `width` characters for console listings
    pub fn preview(&self, width: usize) -> String {
        match self.line_content.char_indices().nth(width) {
            Some((cut, _)) => format!("{}...", &self.line_content[..cut]),
            None => self.line_content.clone(),
        }
    }
}

/// A line covered by a well-formed ALLOWTODO annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exemption {
    pub file_path: String,
    pub line_number: usize,
    #[serde(flatten)]
    pub annotation: ExceptionAnnotation,
}

impl Exemption {
    pub fn status(&self, today: NaiveDate) -> AnnotationStatus {
        self.annotation.status(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_line_format() {
        let violation = Violation::new("src/lib.rs", 12, MarkerKind::Fixme, "// fixme: leaks");
        assert_eq!(violation.report_line(), "src/lib.rs:12:FIXME - // fixme: leaks");
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let violation = Violation::new("a.rs", 1, MarkerKind::Todo, "// TODO: é".repeat(20));
        let preview = violation.preview(15);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 18);

        let short = Violation::new("a.rs", 1, MarkerKind::Todo, "// TODO");
        assert_eq!(short.preview(80), "// TODO");
    }
}
