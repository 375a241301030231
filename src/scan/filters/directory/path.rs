use crate::scan::filters::{DirectoryFilter, Filter, FilterDecision, SkipReason};
use crate::scan::rules::RuleSet;
use std::path::{Component, Path};
use std::sync::Arc;

/// Path Filter - excluded directory names
///
/// A path is skipped when any of its segments equals an excluded name, or a
/// run of consecutive segments equals a multi-segment entry such as
/// `public/build`. Matching is exact: `vendor` does not exclude `vendored/`.
/// The file name itself is a segment too.
#[derive(Debug, Clone)]
pub struct PathFilter {
    rules: Arc<RuleSet>,
}

impl PathFilter {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Normal components of a path as strings
    pub fn segments(path: &Path) -> Vec<String> {
        path.components()
            .filter_map(|component| match component {
                Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect()
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let segments = Self::segments(path);
        self.rules.excluded_directories.iter().any(|excluded| {
            segments
                .windows(excluded.len())
                .any(|window| window == excluded.as_slice())
        })
    }
}

impl Filter for PathFilter {
    type Input = Path;
    type Output = FilterDecision;

    fn filter(&self, path: &Path) -> FilterDecision {
        if self.is_excluded(path) {
            FilterDecision::Skip(SkipReason::ExcludedDirectory)
        } else {
            FilterDecision::Process
        }
    }

    fn name(&self) -> &'static str {
        "PathFilter"
    }
}

impl DirectoryFilter for PathFilter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> PathFilter {
        PathFilter::new(Arc::new(RuleSet::default()))
    }

    #[test]
    fn test_segment_equality() {
        let filter = filter();
        assert!(filter.should_skip(Path::new(".git/config")));
        assert!(filter.should_skip(Path::new("packages/api/node_modules/left-pad/index.js")));
        assert!(filter.should_skip(Path::new("storage/logs/laravel.log")));

        // Substrings never match
        assert!(!filter.should_skip(Path::new("vendored/lib.php")));
        assert!(!filter.should_skip(Path::new("src/my_vendor/lib.php")));
        assert!(!filter.should_skip(Path::new("src/reports.rs")));
    }

    #[test]
    fn test_multi_segment_entries() {
        let filter = filter();
        assert!(filter.should_skip(Path::new("public/build/assets/app.js")));
        assert!(filter.should_skip(Path::new("bootstrap/cache/services.php")));
        assert!(!filter.should_skip(Path::new("public/index.php")));
        assert!(!filter.should_skip(Path::new("build/public/app.js")));
        assert!(!filter.should_skip(Path::new("docs/guide/build.md")));
    }

    #[test]
    fn test_file_name_is_a_segment() {
        // A plain file named like an excluded directory is skipped as well
        assert!(filter().should_skip(Path::new("deploy/docker")));
    }

    #[test]
    fn test_segments_ignore_prefixes() {
        assert_eq!(PathFilter::segments(Path::new("./src/lib.rs")), vec!["src", "lib.rs"]);
        assert!(PathFilter::segments(Path::new("")).is_empty());
    }
}
