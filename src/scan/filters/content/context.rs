//! False-positive rules for lines that hold a marker keyword

use crate::scan::data::{MarkerKind, SuppressionRule};
use crate::scan::rules::RuleSet;
use std::sync::Arc;

/// Suppression rules evaluated in order after a keyword is found
#[derive(Debug, Clone)]
pub struct ContextRules {
    rules: Arc<RuleSet>,
}

impl ContextRules {
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// First suppression rule that applies to `line`, if any
    pub fn suppression(&self, line: &str, kind: MarkerKind) -> Option<SuppressionRule> {
        let lower = line.to_lowercase();

        if self.is_meta_discussion(&lower) {
            return Some(SuppressionRule::MetaDiscussion);
        }
        if kind == MarkerKind::Hack && self.has_security_term(&lower) {
            return Some(SuppressionRule::SecurityContext);
        }
        if !self.has_comment_marker(line) {
            return Some(SuppressionRule::OutsideComment);
        }
        None
    }

    /// `lower` must already be lower-cased
    pub fn is_meta_discussion(&self, lower: &str) -> bool {
        self.rules.meta_phrases.iter().any(|phrase| lower.contains(phrase.as_str()))
    }

    /// `lower` must already be lower-cased
    pub fn has_security_term(&self, lower: &str) -> bool {
        self.rules.security_terms.iter().any(|term| lower.contains(term.as_str()))
    }

    pub fn has_comment_marker(&self, line: &str) -> bool {
        self.rules.comment_markers.iter().any(|marker| line.contains(marker.as_str()))
    }
}
