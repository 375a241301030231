//! Outcome of classifying a single line

use super::MarkerKind;
use crate::scan::filters::content::ExceptionAnnotation;

/// Why a line holding a marker keyword was not reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionRule {
    /// The line talks about the TODO policy itself
    MetaDiscussion,
    /// HACK used next to security vocabulary
    SecurityContext,
    /// No comment marker anywhere on the line
    OutsideComment,
}

impl SuppressionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuppressionRule::MetaDiscussion => "meta discussion",
            SuppressionRule::SecurityContext => "security context",
            SuppressionRule::OutsideComment => "outside comment",
        }
    }
}

/// Decision for one line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineVerdict {
    /// Blank, full-line `#` comment, or no marker keyword
    Clean,
    /// Keyword found but a false-positive rule applied
    Suppressed(SuppressionRule),
    /// A well-formed ALLOWTODO annotation covers the line
    Exempt(ExceptionAnnotation),
    /// Reportable marker occurrence
    Violation(MarkerKind),
}

impl LineVerdict {
    pub fn violation(&self) -> Option<MarkerKind> {
        match self {
            LineVerdict::Violation(kind) => Some(*kind),
            _ => None,
        }
    }
}
