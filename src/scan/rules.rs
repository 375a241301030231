//! Runtime rule sets
//!
//! A [`RuleSet`] is the union of the built-in sets in `static_data` and the
//! additions from configuration. It is built once per run and shared
//! read-only by the exclusion filter and the line classifier.

use crate::config::SweeperConfig;
use crate::scan::static_data::{
    COMMENT_MARKERS, EXCLUDED_DIRECTORIES, HIDDEN_FILE_ALLOW_LIST, META_PHRASES, SECURITY_TERMS,
    SKIPPED_EXTENSIONS, SUPERSEDED_SCANNERS,
};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    /// Excluded directories, each split into its path segments
    pub excluded_directories: Vec<Vec<String>>,
    /// Lower-case extensions with the leading dot
    pub skipped_extensions: HashSet<String>,
    pub hidden_allow_list: HashSet<String>,
    pub superseded_scanners: HashSet<String>,
    /// Lower-case phrases
    pub meta_phrases: Vec<String>,
    /// Lower-case terms
    pub security_terms: Vec<String>,
    pub comment_markers: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::from_config(&SweeperConfig::default())
    }
}

impl RuleSet {
    pub fn from_config(config: &SweeperConfig) -> Self {
        let exclude = &config.exclude;
        let classifier = &config.classifier;

        let mut excluded_directories: Vec<Vec<String>> = Vec::new();
        for entry in EXCLUDED_DIRECTORIES
            .iter()
            .copied()
            .chain(exclude.directories.iter().map(String::as_str))
        {
            let segments = split_segments(entry);
            if !segments.is_empty() && !excluded_directories.contains(&segments) {
                excluded_directories.push(segments);
            }
        }

        let skipped_extensions = SKIPPED_EXTENSIONS
            .iter()
            .map(|ext| ext.to_string())
            .chain(exclude.extensions.iter().map(|ext| normalize_extension(ext)))
            .collect();

        let hidden_allow_list = HIDDEN_FILE_ALLOW_LIST
            .iter()
            .map(|name| name.to_string())
            .chain(exclude.hidden_allow.iter().map(|name| name.trim().to_string()))
            .collect();

        let superseded_scanners = SUPERSEDED_SCANNERS.iter().map(|name| name.to_string()).collect();

        Self {
            excluded_directories,
            skipped_extensions,
            hidden_allow_list,
            superseded_scanners,
            meta_phrases: merge_lowercase(META_PHRASES, &classifier.meta_phrases),
            security_terms: merge_lowercase(SECURITY_TERMS, &classifier.security_terms),
            comment_markers: merge_verbatim(COMMENT_MARKERS, &classifier.comment_markers),
        }
    }
}

fn split_segments(entry: &str) -> Vec<String> {
    entry
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// `PNG`, `.png` and ` .Png ` all become `.png`
fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') { ext } else { format!(".{ext}") }
}

fn merge_lowercase(builtin: &[&str], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = builtin.iter().map(|s| s.to_string()).collect();
    for value in extra {
        let value = value.to_lowercase();
        if !merged.contains(&value) {
            merged.push(value);
        }
    }
    merged
}

fn merge_verbatim(builtin: &[&str], extra: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = builtin.iter().map(|s| s.to_string()).collect();
    for value in extra {
        if !merged.contains(value) {
            merged.push(value.clone());
        }
    }
    merged
}
