//! Statistics for one sweep

use super::{FileResult, LineTally};
use crate::scan::filters::{FilterDecision, SkipReason};
use serde::Serialize;

/// Overall scan statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    // File stats
    pub files_discovered: usize,
    pub files_scanned: usize,
    pub files_unreadable: usize,

    // Exclusion stats
    pub directories_pruned: usize,
    pub files_excluded_by_directory: usize,
    pub files_excluded_by_extension: usize,
    pub files_excluded_hidden: usize,
    pub files_excluded_superseded: usize,

    // Line stats
    pub lines_processed: usize,
    pub lines_exempted: usize,
    pub lines_suppressed_meta: usize,
    pub lines_suppressed_security: usize,
    pub lines_suppressed_outside_comment: usize,

    pub total_violations: usize,
    pub scan_duration_ms: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a file the exclusion filter turned away
    pub fn record_exclusion(&mut self, decision: FilterDecision) {
        let FilterDecision::Skip(reason) = decision else {
            return;
        };
        match reason {
            SkipReason::ExcludedDirectory => self.files_excluded_by_directory += 1,
            SkipReason::SkippedExtension => self.files_excluded_by_extension += 1,
            SkipReason::HiddenFile => self.files_excluded_hidden += 1,
            SkipReason::SupersededScanner => self.files_excluded_superseded += 1,
        }
    }

    /// Fold a scanned file into the totals
    pub fn absorb(&mut self, result: &FileResult) {
        let LineTally {
            lines,
            exempted,
            meta_discussion,
            security_context,
            outside_comment,
        } = result.tally;

        self.lines_processed += lines;
        self.lines_exempted += exempted;
        self.lines_suppressed_meta += meta_discussion;
        self.lines_suppressed_security += security_context;
        self.lines_suppressed_outside_comment += outside_comment;
        self.total_violations += result.violations.len();
    }

    pub fn files_excluded(&self) -> usize {
        self.files_excluded_by_directory
            + self.files_excluded_by_extension
            + self.files_excluded_hidden
            + self.files_excluded_superseded
    }

    pub fn lines_suppressed(&self) -> usize {
        self.lines_suppressed_meta
            + self.lines_suppressed_security
            + self.lines_suppressed_outside_comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::data::{LineVerdict, MarkerKind, SuppressionRule, Violation};

    #[test]
    fn test_record_exclusion() {
        let mut stats = ScanStats::new();
        stats.record_exclusion(FilterDecision::Process);
        stats.record_exclusion(FilterDecision::Skip(SkipReason::SkippedExtension));
        stats.record_exclusion(FilterDecision::Skip(SkipReason::HiddenFile));
        stats.record_exclusion(FilterDecision::Skip(SkipReason::HiddenFile));

        assert_eq!(stats.files_excluded_by_extension, 1);
        assert_eq!(stats.files_excluded_hidden, 2);
        assert_eq!(stats.files_excluded(), 3);
    }

    #[test]
    fn test_absorb_file_result() {
        let mut result = FileResult::new("src/a.rs");
        result.tally.record(&LineVerdict::Clean);
        result.tally.record(&LineVerdict::Suppressed(SuppressionRule::OutsideComment));
        result.tally.record(&LineVerdict::Violation(MarkerKind::Todo));
        result.violations.push(Violation::new("src/a.rs", 3, MarkerKind::Todo, "// TODO"));

        let mut stats = ScanStats::new();
        stats.absorb(&result);
        stats.absorb(&result);

        assert_eq!(stats.lines_processed, 6);
        assert_eq!(stats.lines_suppressed_outside_comment, 2);
        assert_eq!(stats.lines_suppressed(), 2);
        assert_eq!(stats.total_violations, 2);
    }
}
