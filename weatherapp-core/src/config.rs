use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::query::LocationQuery;

/// The `[Default]` section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultSection {
    /// OpenWeather API key.
    #[serde(default)]
    pub api: String,

    /// Overrides the provider endpoint; mostly useful for testing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [Default]
/// api = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(rename = "Default", default)]
    pub default: DefaultSection,
}

impl Config {
    /// Load config from the platform config directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from `path`. A missing file is an error: nothing can be
    /// queried without an API key.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!(
                "Config file not found: {}\n\
                 Hint: run `weatherapp configure` and enter your API key.",
                path.display()
            ));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform config directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherapp", "weatherapp")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.default.api = api_key.trim().to_string();
    }

    /// Returns the API key, failing if it is blank.
    pub fn api_key(&self) -> Result<&str> {
        let key = self.default.api.trim();
        if key.is_empty() {
            return Err(anyhow!(
                "No API key configured.\n\
                 Hint: run `weatherapp configure` and enter your API key."
            ));
        }
        Ok(key)
    }

    /// Build a query client from the configured key and endpoint.
    pub fn location_query(&self) -> Result<LocationQuery> {
        let api_key = self.api_key()?.to_string();
        Ok(match &self.default.endpoint {
            Some(endpoint) => LocationQuery::with_endpoint(api_key, endpoint.clone()),
            None => LocationQuery::new(api_key),
        })
    }
}
