use super::formats::ConfigFormat;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Report location used when nothing else is configured, relative to the root
pub const DEFAULT_REPORT_PATH: &str = "reports/todo_violations.txt";

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "TODO_SWEEPER_";

/// Project configuration files looked up in the scanned root, lowest priority first
pub const PROJECT_CONFIG_FILES: &[&str] = &[
    "todo-sweeper.json",
    "todo-sweeper.yml",
    "todo-sweeper.yaml",
    ".todo-sweeper.toml",
    "todo-sweeper.toml",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweeperConfig {
    /// Additions to the path exclusion rules
    pub exclude: ExcludeConfig,

    /// Additions to the line classifier's suppression rules
    pub classifier: ClassifierConfig,

    /// Traversal options
    pub scan: ScanConfig,

    /// Report artifact and console listing options
    pub report: ReportConfig,
}

/// Extra exclusion entries merged with the built-in sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExcludeConfig {
    /// Directory names (or `a/b` segment runs) to skip
    pub directories: Vec<String>,

    /// File extensions to skip, with or without the leading dot
    pub extensions: Vec<String>,

    /// Hidden file names that should still be scanned
    pub hidden_allow: Vec<String>,
}

/// Extra suppression entries merged with the built-in sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub meta_phrases: Vec<String>,
    pub security_terms: Vec<String>,
    pub comment_markers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links while walking
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Write the plain-text report when violations are found
    pub enabled: bool,

    /// Report location, relative to the root unless absolute
    pub path: PathBuf,

    /// Samples listed per marker kind on the console
    pub sample_limit: usize,

    /// Characters of line text shown per console sample
    pub preview_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from(DEFAULT_REPORT_PATH),
            sample_limit: 5,
            preview_width: 80,
        }
    }
}

impl ReportConfig {
    /// Absolute report location for a given root
    pub fn resolve_path(&self, root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            root.join(&self.path)
        }
    }
}

impl SweeperConfig {
    /// Load the merged configuration for `root`
    ///
    /// `overrides` is a partial document (typically built from CLI flags)
    /// merged last.
    pub fn load<T: Serialize>(root: &Path, custom_config: Option<&Path>, overrides: Option<T>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting for root {}", root.display());

        let mut figment = Figment::from(Serialized::defaults(SweeperConfig::default()));

        for name in PROJECT_CONFIG_FILES {
            let path = root.join(name);
            if path.is_file() {
                tracing::debug!("Using project config {}", path.display());
                figment = ConfigFormat::from_path(&path)?.merge_file(figment, &path);
            }
        }

        if let Some(path) = custom_config {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            tracing::debug!("Using custom config {}", path.display());
            figment = ConfigFormat::from_path(path)?.merge_file(figment, path);
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(overrides) = overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::defaults(overrides));
        }

        let config: SweeperConfig = figment
            .extract()
            .context("Failed to parse configuration")?;
        config.validate()?;

        tracing::trace!("CONFIG LOAD: Final report path = {}", config.report.path.display());
        Ok(config)
    }

    /// Reject values that would make the sweep meaningless
    pub fn validate(&self) -> Result<()> {
        let additions = [
            ("exclude.directories", &self.exclude.directories),
            ("exclude.extensions", &self.exclude.extensions),
            ("exclude.hidden_allow", &self.exclude.hidden_allow),
            ("classifier.meta_phrases", &self.classifier.meta_phrases),
            ("classifier.security_terms", &self.classifier.security_terms),
            ("classifier.comment_markers", &self.classifier.comment_markers),
        ];
        for (key, values) in additions {
            if values.iter().any(|value| value.trim().is_empty()) {
                anyhow::bail!("{key} cannot contain empty entries");
            }
        }

        if self.report.path.as_os_str().is_empty() {
            anyhow::bail!("report.path cannot be empty");
        }
        if self.report.sample_limit == 0 {
            anyhow::bail!("report.sample_limit must be at least 1");
        }
        if self.report.preview_width == 0 {
            anyhow::bail!("report.preview_width must be at least 1");
        }

        Ok(())
    }
}
