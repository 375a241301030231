//! Result from scanning a single file

use super::{Exemption, LineVerdict, SuppressionRule, Violation};

/// Per-file counts of how lines were judged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    pub lines: usize,
    pub exempted: usize,
    pub meta_discussion: usize,
    pub security_context: usize,
    pub outside_comment: usize,
}

impl LineTally {
    pub fn record(&mut self, verdict: &LineVerdict) {
        self.lines += 1;
        match verdict {
            LineVerdict::Exempt(_) => self.exempted += 1,
            LineVerdict::Suppressed(SuppressionRule::MetaDiscussion) => self.meta_discussion += 1,
            LineVerdict::Suppressed(SuppressionRule::SecurityContext) => self.security_context += 1,
            LineVerdict::Suppressed(SuppressionRule::OutsideComment) => self.outside_comment += 1,
            LineVerdict::Clean | LineVerdict::Violation(_) => {}
        }
    }
}

/// Result from scanning a single file
#[derive(Debug, Clone, Default)]
pub struct FileResult {
    /// Root-relative path
    pub file_path: String,

    /// Violations in ascending line order
    pub violations: Vec<Violation>,

    pub exemptions: Vec<Exemption>,

    pub tally: LineTally,
}

impl FileResult {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::data::MarkerKind;

    #[test]
    fn test_has_violations() {
        let mut result = FileResult::new("src/a.rs");
        assert!(!result.has_violations());
        result.violations.push(Violation::new("src/a.rs", 1, MarkerKind::Todo, "// TODO"));
        assert!(result.has_violations());
    }
}
