//! Main Scanner implementation

use crate::config::SweeperConfig;
use crate::scan::{
    data::{ScanResult, ScanStats},
    filters::{content::LineClassifier, directory::ExclusionFilter},
    pipeline::{DirectoryPipeline, FilePipeline},
    rules::RuleSet,
};
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Sweeps one project root
///
/// The root is fixed at construction and never changes for the lifetime of
/// the scanner.
pub struct Scanner {
    root: PathBuf,
    directory_pipeline: DirectoryPipeline,
    file_pipeline: FilePipeline,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>, config: &SweeperConfig) -> Result<Self> {
        let root = root.into();
        let rules = Arc::new(RuleSet::from_config(config));
        tracing::debug!(
            "Rule set: {} excluded directories, {} skipped extensions, {} meta phrases",
            rules.excluded_directories.len(),
            rules.skipped_extensions.len(),
            rules.meta_phrases.len()
        );

        let report_path = config.report.resolve_path(&root);
        let directory_pipeline = DirectoryPipeline::new(
            root.clone(),
            ExclusionFilter::new(rules.clone()),
            config.scan.follow_symlinks,
        )
        .with_artifact(&report_path);
        let file_pipeline = FilePipeline::new(root.clone(), LineClassifier::new(rules));

        Ok(Self {
            root,
            directory_pipeline,
            file_pipeline,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and classify every non-excluded file
    ///
    /// Only an unusable root is an error. Files that cannot be read are
    /// counted and skipped.
    pub fn scan(&self) -> Result<ScanResult> {
        let start = Instant::now();
        let mut stats = ScanStats::new();

        let files = self.directory_pipeline.discover_files(&mut stats)?;

        let mut violations = Vec::new();
        let mut exemptions = Vec::new();
        for file in &files {
            stats.files_scanned += 1;
            match self.file_pipeline.process_file(file) {
                Ok(result) => {
                    if result.has_violations() {
                        tracing::debug!("{}: {} violations", result.file_path, result.violations.len());
                    }
                    stats.absorb(&result);
                    violations.extend(result.violations);
                    exemptions.extend(result.exemptions);
                }
                Err(e) => {
                    stats.files_unreadable += 1;
                    tracing::debug!("Skipping unreadable file: {:#}", e);
                }
            }
        }

        stats.scan_duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Scanned {} files in {}ms: {} violations, {} exemptions",
            stats.files_scanned,
            stats.scan_duration_ms,
            violations.len(),
            exemptions.len()
        );

        Ok(ScanResult::new(violations, exemptions, stats))
    }
}
