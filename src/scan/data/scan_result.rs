//! Overall sweep result

use super::{Exemption, MarkerKind, ScanStats, Violation};
use serde::Serialize;
use std::collections::BTreeMap;

/// Complete result of one sweep
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Violations in traversal order, ascending line number within a file
    pub violations: Vec<Violation>,

    /// Lines covered by ALLOWTODO annotations, in the same order
    pub exemptions: Vec<Exemption>,

    pub stats: ScanStats,
}

impl ScanResult {
    pub fn new(violations: Vec<Violation>, exemptions: Vec<Exemption>, stats: ScanStats) -> Self {
        Self {
            violations,
            exemptions,
            stats,
        }
    }

    /// The sweep passes iff nothing was reported
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Violations grouped by kind, each group keeping traversal order
    pub fn by_kind(&self) -> BTreeMap<MarkerKind, Vec<&Violation>> {
        let mut groups: BTreeMap<MarkerKind, Vec<&Violation>> = BTreeMap::new();
        for violation in &self.violations {
            groups.entry(violation.kind).or_default().push(violation);
        }
        groups
    }

    /// Distinct files holding at least one violation, sorted
    pub fn files_with_violations(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.violations.iter().map(|v| v.file_path.as_str()).collect();
        files.sort_unstable();
        files.dedup();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(path: &str, line: usize, kind: MarkerKind) -> Violation {
        Violation::new(path, line, kind, format!("// {kind}"))
    }

    #[test]
    fn test_passed_iff_empty() {
        assert!(ScanResult::new(vec![], vec![], ScanStats::new()).passed());

        let result = ScanResult::new(vec![violation("a.rs", 1, MarkerKind::Todo)], vec![], ScanStats::new());
        assert!(!result.passed());
        assert_eq!(result.violation_count(), 1);
    }

    #[test]
    fn test_by_kind_keeps_order_within_group() {
        let result = ScanResult::new(
            vec![
                violation("b.rs", 4, MarkerKind::Hack),
                violation("a.rs", 1, MarkerKind::Todo),
                violation("a.rs", 9, MarkerKind::Hack),
            ],
            vec![],
            ScanStats::new(),
        );

        let groups = result.by_kind();
        let kinds: Vec<_> = groups.keys().copied().collect();
        assert_eq!(kinds, vec![MarkerKind::Todo, MarkerKind::Hack]);

        let hacks: Vec<_> = groups[&MarkerKind::Hack].iter().map(|v| v.line_number).collect();
        assert_eq!(hacks, vec![4, 9]);
        assert_eq!(result.files_with_violations(), vec!["a.rs", "b.rs"]);
    }
}
