//! Binary file filtering

use crate::scan::filters::{DirectoryFilter, Filter, FilterDecision, SkipReason};
use crate::scan::rules::RuleSet;
use std::path::Path;
use std::sync::Arc;

/// Filter binary files based on extension
#[derive(Debug, Clone)]
pub struct BinaryFilter {
    rules: Arc<RuleSet>,
}

impl BinaryFilter {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Lower-cased final extension with its leading dot, e.g. `.gz` for `a.tar.GZ`
    pub fn dotted_extension(path: &Path) -> Option<String> {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
    }
}

impl Filter for BinaryFilter {
    type Input = Path;
    type Output = FilterDecision;

    fn filter(&self, path: &Path) -> FilterDecision {
        match Self::dotted_extension(path) {
            Some(ext) if self.rules.skipped_extensions.contains(&ext) => {
                FilterDecision::Skip(SkipReason::SkippedExtension)
            }
            _ => FilterDecision::Process,
        }
    }

    fn name(&self) -> &'static str {
        "BinaryFilter"
    }
}

impl DirectoryFilter for BinaryFilter {}
