//! Line-level classification data and the compiled regexes built from it

use regex::Regex;
use std::sync::LazyLock;

/// A trimmed line starting with this is a full-line comment and never a candidate.
pub const FULL_LINE_COMMENT: &str = "#";

/// Lower-case phrases that mark a line as talking about the TODO policy itself.
///
/// `scan.*todo` is matched literally, not as a pattern.
pub const META_PHRASES: &[&str] = &[
    "todo sweeper",
    "todo comment",
    "todo format",
    "todo violation",
    "todo-sweeper",
    "allowtodo:",
    "todo pattern",
    "foundtodos",
    "complianttodos",
    "\"todo\"",
    "'todo'",
    "scan.*todo",
];

/// Terms that turn a HACK keyword into security vocabulary.
pub const SECURITY_TERMS: &[&str] = &["security", "breach", "vulnerability", "compromise", "attack"];

/// At least one of these must appear somewhere on a line for it to count.
pub const COMMENT_MARKERS: &[&str] = &["//", "#", "/*", "*", "--"];

/// Shown to users whenever violations are found.
pub const ANNOTATION_EXAMPLE: &str = "// ALLOWTODO: JIRA-123 2025-08-27 Single sentence reason";

/// Whole-word, case-insensitive marker keyword.
///
/// `\b` is Unicode aware: letters, digits and `_` are word characters, so
/// `myTodoHandler` and `todo_list` never match.
pub static KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    tracing::debug!("Compiling marker keyword regex");
    Regex::new(r"(?i)\b(TODO|FIXME|HACK)\b").expect("keyword regex is valid")
});

/// Well-formed exception annotation.
///
/// Only the `ALLOWTODO` label is case-insensitive; the ticket must be
/// upper-case letters, a dash and digits.
pub static ANNOTATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    tracing::debug!("Compiling exception annotation regex");
    Regex::new(r"\b(?i:ALLOWTODO):\s+([A-Z]+-[0-9]+)\s+([0-9]{4}-[0-9]{2}-[0-9]{2})\s+(.{10,100})")
        .expect("annotation regex is valid")
});

/// Line terminators recognized when splitting file content: `\r\n`, lone `\r` and `\n`.
pub static LINE_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    tracing::debug!("Compiling line break regex");
    Regex::new(r"\r\n|\r|\n").expect("line break regex is valid")
});
