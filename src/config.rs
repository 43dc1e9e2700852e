//! Application configuration: dataset locations and server binding.
//!
//! Configuration comes from an optional `cyi.toml` file with environment
//! variable overrides on top, so a bare checkout with the default file
//! layout starts without any configuration at all.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load/parse failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub datasets: DatasetSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Locations of the two raw CSV inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_historical_csv")]
    pub historical_csv: PathBuf,
    #[serde(default = "default_predictions_csv")]
    pub predictions_csv: PathBuf,
}

/// HTTP server bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_historical_csv() -> PathBuf {
    PathBuf::from("data/combined_crop_weather_dataset.csv")
}

fn default_predictions_csv() -> PathBuf {
    PathBuf::from("data/future_yield_predictions.csv")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            historical_csv: default_historical_csv(),
            predictions_csv: default_predictions_csv(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datasets: DatasetSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the first `cyi.toml` found in the standard
    /// locations, falling back to defaults, then apply environment overrides.
    ///
    /// # Environment Variables
    /// - `CYI_CONFIG`: explicit config file path
    /// - `CYI_HISTORICAL_CSV` / `CYI_PREDICTIONS_CSV`: dataset paths
    /// - `HOST` / `PORT`: server binding
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = if let Ok(path) = env::var("CYI_CONFIG") {
            Self::from_file(path)?
        } else {
            Self::from_default_location().unwrap_or_default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    fn from_default_location() -> Option<Self> {
        let search_paths = [
            PathBuf::from("cyi.toml"),
            PathBuf::from("config/cyi.toml"),
            PathBuf::from("../cyi.toml"),
        ];

        search_paths
            .iter()
            .find(|path| path.exists())
            .and_then(|path| Self::from_file(path).ok())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var("CYI_HISTORICAL_CSV") {
            self.datasets.historical_csv = PathBuf::from(path);
        }
        if let Ok(path) = env::var("CYI_PREDICTIONS_CSV") {
            self.datasets.predictions_csv = PathBuf::from(path);
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }
}
