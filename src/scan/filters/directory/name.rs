use crate::scan::filters::{DirectoryFilter, Filter, FilterDecision, SkipReason};
use crate::scan::rules::RuleSet;
use std::path::Path;
use std::sync::Arc;

/// Name Filter - hidden files and superseded scanner scripts
#[derive(Debug, Clone)]
pub struct NameFilter {
    rules: Arc<RuleSet>,
}

impl NameFilter {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }
}

impl Filter for NameFilter {
    type Input = Path;
    type Output = FilterDecision;

    fn filter(&self, path: &Path) -> FilterDecision {
        let Some(file_name) = path.file_name() else {
            return FilterDecision::Process;
        };
        let file_name = file_name.to_string_lossy();

        if file_name.starts_with('.') && !self.rules.hidden_allow_list.contains(file_name.as_ref()) {
            return FilterDecision::Skip(SkipReason::HiddenFile);
        }

        if self.rules.superseded_scanners.contains(file_name.as_ref()) {
            return FilterDecision::Skip(SkipReason::SupersededScanner);
        }

        FilterDecision::Process
    }

    fn name(&self) -> &'static str {
        "NameFilter"
    }
}

impl DirectoryFilter for NameFilter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> NameFilter {
        NameFilter::new(Arc::new(RuleSet::default()))
    }

    #[test]
    fn test_hidden_files() {
        let filter = filter();
        assert!(filter.should_skip(Path::new(".env")));
        assert!(filter.should_skip(Path::new("config/.DS_Store")));
        assert!(!filter.should_skip(Path::new(".env.example")));
        assert!(!filter.should_skip(Path::new("sub/.gitignore")));
        assert!(!filter.should_skip(Path::new("public/.htaccess")));
    }

    #[test]
    fn test_hidden_directory_does_not_hide_files() {
        assert!(!filter().should_skip(Path::new(".circleci/config.yml")));
    }

    #[test]
    fn test_superseded_scanners() {
        let filter = filter();
        assert_eq!(
            filter.filter(Path::new("scripts/todo-sweeper.php")),
            FilterDecision::Skip(SkipReason::SupersededScanner)
        );
        assert!(filter.should_skip(Path::new("scripts/todo_sweeper.py")));
        assert!(!filter.should_skip(Path::new("scripts/todo-sweeper.sh")));
    }

    #[test]
    fn test_allow_list_extension() {
        let mut config = crate::config::SweeperConfig::default();
        config.exclude.hidden_allow.push(".editorconfig".to_string());
        let filter = NameFilter::new(Arc::new(RuleSet::from_config(&config)));
        assert!(!filter.should_skip(Path::new(".editorconfig")));
        assert!(filter.should_skip(Path::new(".npmrc")));
    }
}
