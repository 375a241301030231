//! Recognized marker keywords

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker keyword kind, always reported in upper case.
///
/// The declaration order is the order groups are listed in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkerKind {
    Todo,
    Fixme,
    Hack,
}

impl MarkerKind {
    pub const ALL: [MarkerKind; 3] = [MarkerKind::Todo, MarkerKind::Fixme, MarkerKind::Hack];

    /// Map a matched keyword (any case) to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(keyword))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerKind::Todo => "TODO",
            MarkerKind::Fixme => "FIXME",
            MarkerKind::Hack => "HACK",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
