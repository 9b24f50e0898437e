use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use weatherapp_core::{Config, TemperatureUnit};

use crate::display;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherapp", version, about = "Current weather for a city")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name.
        city: String,

        /// Optional country name or ISO2 code; ignored if it can't be resolved.
        #[arg(long)]
        country: Option<String>,

        /// Display temperatures in Fahrenheit.
        #[arg(long)]
        fahrenheit: bool,

        /// Print the record as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(self.config),
            Command::Show {
                city,
                country,
                fahrenheit,
                json,
            } => {
                let config = load_config(self.config.as_deref())?;
                let query = config.location_query()?;

                let record = weatherapp_core::lookup(&query, &city, country.as_deref())
                    .await
                    .inspect_err(|e| {
                        tracing::warn!(city = %city, error = %e, "weather lookup failed");
                    })?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&record)?);
                } else {
                    let mut unit = TemperatureUnit::default();
                    if fahrenheit {
                        unit = unit.toggle();
                    }
                    print!("{}", display::render(&record, unit));
                }

                Ok(())
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    tracing::debug!(path = ?path, "loading config");
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn configure(path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::config_file_path()?,
    };

    let mut config = existing_or_default(&path)?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.api_key()?;
    config.save_to(&path)?;

    tracing::debug!(path = %path.display(), "saved configuration");
    println!("Saved configuration to {}", path.display());
    Ok(())
}

/// Load the config at `path` so settings like an endpoint override survive
/// re-configuration. Only a missing file starts from defaults.
fn existing_or_default(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        Config::load_from(path)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_starts_from_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = existing_or_default(&dir.path().join("config.toml")).unwrap();
        assert!(cfg.default.api.is_empty());
        assert!(cfg.default.endpoint.is_none());
    }

    #[test]
    fn existing_config_keeps_endpoint_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[Default]\napi = \"OLD\"\nendpoint = \"http://localhost:8080/w\"\n")
            .unwrap();

        let cfg = existing_or_default(&path).unwrap();
        assert_eq!(cfg.default.endpoint.as_deref(), Some("http://localhost:8080/w"));
    }

    #[test]
    fn unparseable_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is [not toml").unwrap();

        let err = existing_or_default(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
