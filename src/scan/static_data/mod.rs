//! Static shared data structures
//!
//! Every fixed rule set the sweeper relies on lives here as a named constant so
//! it can be tested and extended without touching the filter control flow.
//! Runtime additions from configuration are merged in `scan::rules::RuleSet`.

pub mod markers;
pub mod paths;

pub use markers::{
    ANNOTATION_EXAMPLE, ANNOTATION_REGEX, COMMENT_MARKERS, FULL_LINE_COMMENT, KEYWORD_REGEX,
    LINE_BREAK_REGEX, META_PHRASES, SECURITY_TERMS,
};
pub use paths::{
    EXCLUDED_DIRECTORIES, HIDDEN_FILE_ALLOW_LIST, SKIPPED_EXTENSIONS, SUPERSEDED_SCANNERS,
};
