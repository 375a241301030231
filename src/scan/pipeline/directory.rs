//! Directory traversal and file discovery pipeline

use crate::scan::{
    data::ScanStats,
    filters::{FilterDecision, directory::ExclusionFilter},
};
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Pipeline for directory traversal and file filtering
pub struct DirectoryPipeline {
    root: PathBuf,
    exclusion: ExclusionFilter,
    follow_symlinks: bool,
    /// Root-relative paths the sweeper itself writes
    artifacts: Vec<PathBuf>,
}

impl DirectoryPipeline {
    pub fn new(root: PathBuf, exclusion: ExclusionFilter, follow_symlinks: bool) -> Self {
        Self {
            root,
            exclusion,
            follow_symlinks,
            artifacts: Vec::new(),
        }
    }

    /// Never scan `path` (absolute or root-relative) if it lies under the root
    pub fn with_artifact(mut self, path: &Path) -> Self {
        let relative = match path.strip_prefix(&self.root) {
            Ok(relative) => Some(relative.to_path_buf()),
            Err(_) if path.is_relative() => Some(path.to_path_buf()),
            Err(_) => None,
        };
        if let Some(relative) = relative {
            self.artifacts.push(relative);
        }
        self
    }

    /// Fail unless the root is a directory that can be listed
    pub fn check_root(&self) -> Result<()> {
        let metadata = fs::metadata(&self.root)
            .with_context(|| format!("Cannot access project root {}", self.root.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Project root is not a directory: {}", self.root.display());
        }
        fs::read_dir(&self.root)
            .with_context(|| format!("Cannot read project root {}", self.root.display()))?;
        Ok(())
    }

    /// Discover all files to scan, as root-relative paths in traversal order
    ///
    /// Excluded directories are pruned without being listed. Every regular
    /// file reached is counted as discovered; files the exclusion filter
    /// rejects are counted by reason.
    pub fn discover_files(&self, stats: &mut ScanStats) -> Result<Vec<PathBuf>> {
        self.check_root()?;

        let pruned = Arc::new(AtomicUsize::new(0));
        let pruned_counter = pruned.clone();
        let exclusion = self.exclusion.clone();
        let root = self.root.clone();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false) // Exclusion is path-based only, never .gitignore
            .hidden(false)
            .follow_links(self.follow_symlinks)
            .max_depth(None)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                    return true;
                }
                let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
                if exclusion.should_prune_directory(relative) {
                    tracing::trace!("Pruning excluded directory {}", relative.display());
                    pruned_counter.fetch_add(1, Ordering::Relaxed);
                    return false;
                }
                true
            });

        let mut files = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    // Log error but continue walking
                    tracing::warn!("Error walking directory: {}", err);
                    continue;
                }
            };

            // Symlinked files are scanned; symlinked directories are never descended
            let is_file = match entry.file_type() {
                Some(ft) if ft.is_file() => true,
                Some(_) if entry.path_is_symlink() => {
                    fs::metadata(entry.path()).is_ok_and(|metadata| metadata.is_file())
                }
                _ => false,
            };
            if !is_file {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_path_buf();

            if self.artifacts.contains(&relative) {
                tracing::debug!("Not scanning report artifact {}", relative.display());
                continue;
            }

            stats.files_discovered += 1;

            let decision = self.exclusion.decide(&relative);
            if let FilterDecision::Skip(_) = decision {
                stats.record_exclusion(decision);
                continue;
            }

            files.push(relative);
        }

        stats.directories_pruned += pruned.load(Ordering::Relaxed);

        tracing::info!("Discovered {} files to scan", files.len());
        Ok(files)
    }
}
