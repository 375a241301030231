use super::{ContextRules, ExceptionAnnotation};
use crate::scan::data::{LineVerdict, MarkerKind};
use crate::scan::filters::Filter;
use crate::scan::rules::RuleSet;
use crate::scan::static_data::{FULL_LINE_COMMENT, KEYWORD_REGEX};
use std::sync::Arc;

/// Decides for one line of text whether it is a violation
///
/// Pure function of the line and the rule set: no file or position context.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    context: ContextRules,
}

impl LineClassifier {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self {
            context: ContextRules::new(rules),
        }
    }

    /// Full verdict for a line
    pub fn judge(&self, line: &str) -> LineVerdict {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(FULL_LINE_COMMENT) {
            return LineVerdict::Clean;
        }

        if let Some(annotation) = ExceptionAnnotation::parse(line) {
            return LineVerdict::Exempt(annotation);
        }

        let Some(kind) = Self::first_keyword(line) else {
            return LineVerdict::Clean;
        };

        match self.context.suppression(line, kind) {
            Some(rule) => LineVerdict::Suppressed(rule),
            None => LineVerdict::Violation(kind),
        }
    }

    /// The marker kind to report, or `None` when the line is not a violation
    pub fn classify(&self, line: &str) -> Option<MarkerKind> {
        self.judge(line).violation()
    }

    /// Kind of the first whole-word keyword on the line
    pub fn first_keyword(line: &str) -> Option<MarkerKind> {
        KEYWORD_REGEX
            .captures(line)
            .and_then(|captures| MarkerKind::from_keyword(&captures[1]))
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(Arc::new(RuleSet::default()))
    }
}

impl Filter for LineClassifier {
    type Input = str;
    type Output = LineVerdict;

    fn filter(&self, line: &str) -> LineVerdict {
        self.judge(line)
    }

    fn name(&self) -> &'static str {
        "LineClassifier"
    }
}
