//! Directory-level filters, applied before any file is opened
//!
//! ## Filter Hierarchy
//!
//! Applied in this order, the first skip wins:
//! 1. **Path Filter** - excluded directory segments
//! 2. **Binary Filter** - binary/media/compiled extensions
//! 3. **Name Filter** - hidden files outside the allow-list, superseded scanners
//!
//! Only path metadata is consulted. File content never decides exclusion.

pub mod binary;
pub mod name;
pub mod path;

pub use binary::BinaryFilter;
pub use name::NameFilter;
pub use path::PathFilter;

use super::{DirectoryFilter, Filter, FilterDecision};
use crate::scan::rules::RuleSet;
use std::path::Path;
use std::sync::Arc;

/// All exclusion rules in their fixed order
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    path_filter: PathFilter,
    binary_filter: BinaryFilter,
    name_filter: NameFilter,
}

impl ExclusionFilter {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            path_filter: PathFilter::new(rules.clone()),
            binary_filter: BinaryFilter::new(rules.clone()),
            name_filter: NameFilter::new(rules),
        }
    }

    /// Decide for a root-relative file path
    pub fn decide(&self, path: &Path) -> FilterDecision {
        let filters: [&dyn DirectoryFilter; 3] =
            [&self.path_filter, &self.binary_filter, &self.name_filter];

        for filter in filters {
            let decision = filter.filter(path);
            if let FilterDecision::Skip(reason) = decision {
                tracing::debug!("{} skipped {} ({})", filter.name(), path.display(), reason.as_str());
                return decision;
            }
        }
        FilterDecision::Process
    }

    /// Whether traversal should not descend into a root-relative directory
    pub fn should_prune_directory(&self, path: &Path) -> bool {
        self.path_filter.should_skip(path)
    }
}

impl Filter for ExclusionFilter {
    type Input = Path;
    type Output = FilterDecision;

    fn filter(&self, path: &Path) -> FilterDecision {
        self.decide(path)
    }

    fn name(&self) -> &'static str {
        "ExclusionFilter"
    }
}

impl DirectoryFilter for ExclusionFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::filters::SkipReason;

    fn filter() -> ExclusionFilter {
        ExclusionFilter::new(Arc::new(RuleSet::default()))
    }

    #[test]
    fn test_rule_order() {
        let filter = filter();

        // Directory rule fires before extension and name rules
        assert_eq!(
            filter.decide(Path::new("vendor/.hidden.png")),
            FilterDecision::Skip(SkipReason::ExcludedDirectory)
        );
        // Extension rule fires before the hidden-file rule
        assert_eq!(
            filter.decide(Path::new("assets/.logo.png")),
            FilterDecision::Skip(SkipReason::SkippedExtension)
        );
        assert_eq!(
            filter.decide(Path::new("config/.secret")),
            FilterDecision::Skip(SkipReason::HiddenFile)
        );
        assert_eq!(
            filter.decide(Path::new("scripts/todo-sweeper.php")),
            FilterDecision::Skip(SkipReason::SupersededScanner)
        );
    }

    #[test]
    fn test_processes_ordinary_sources() {
        let filter = filter();
        for path in ["src/main.rs", "app/Http/Kernel.php", ".env.example", "web/.htaccess", "README.md"] {
            assert!(!filter.should_skip(Path::new(path)), "{path} should be scanned");
        }
    }

    #[test]
    fn test_prune_only_uses_directory_rule() {
        let filter = filter();
        assert!(filter.should_prune_directory(Path::new("node_modules")));
        assert!(filter.should_prune_directory(Path::new("public/build")));
        assert!(!filter.should_prune_directory(Path::new(".circleci")));
        assert!(!filter.should_prune_directory(Path::new("public")));
    }
}
