use super::core::SweeperConfig;
use anyhow::Result;
use figment::{
    Figment,
    providers::{Format, Json, Toml, Yaml},
};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
            _ => anyhow::bail!(
                "Unsupported config format: {}. Use .toml, .yaml, .yml or .json",
                path.display()
            ),
        }
    }

    /// Merge a file of this format on top of `figment`
    pub fn merge_file(self, figment: Figment, path: &Path) -> Figment {
        match self {
            ConfigFormat::Json => figment.merge(Json::file(path)),
            ConfigFormat::Toml => figment.merge(Toml::file(path)),
            ConfigFormat::Yaml => figment.merge(Yaml::file(path)),
        }
    }
}

impl SweeperConfig {
    /// Export configuration in specified format
    pub fn export(&self, format: ConfigFormat) -> Result<String> {
        let output = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yml::to_string(self)?,
        };

        Ok(output)
    }
}
