//! Filters for paths and line content
//!
//! Directory-level filters decide from path metadata alone whether a file is
//! read at all. Content filters judge individual lines of files that passed.
//! All filters implement [`Filter`] so they can be composed and tested alone.

pub mod content;
pub mod directory;

use std::path::Path;

/// Common trait for all filters
pub trait Filter {
    /// Input type for the filter
    type Input: ?Sized;
    /// Output type for the filter
    type Output;

    /// Apply the filter to the input
    fn filter(&self, input: &Self::Input) -> Self::Output;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}

/// Why a path was excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A path segment (or run of segments) is an excluded directory
    ExcludedDirectory,
    /// Binary, media or compiled-artifact extension
    SkippedExtension,
    /// Hidden file outside the allow-list
    HiddenFile,
    /// One of the scripts this tool replaces
    SupersededScanner,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ExcludedDirectory => "excluded directory",
            SkipReason::SkippedExtension => "skipped extension",
            SkipReason::HiddenFile => "hidden file",
            SkipReason::SupersededScanner => "superseded scanner",
        }
    }
}

/// Decision enum for directory-level filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Process this file/directory
    Process,
    /// Skip this file/directory with reason
    Skip(SkipReason),
}

impl FilterDecision {
    pub fn is_skip(&self) -> bool {
        matches!(self, FilterDecision::Skip(_))
    }
}

/// Directory-level filter for path-based filtering
pub trait DirectoryFilter: Filter<Input = Path, Output = FilterDecision> {
    /// Returns true if the path should be skipped
    fn should_skip(&self, path: &Path) -> bool {
        self.filter(path).is_skip()
    }
}
