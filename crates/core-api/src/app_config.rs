use std::{io, path::Path};

use serde::Deserialize;
use starwars_database::DatabaseConfig;
use thiserror::Error;

#[cfg(feature = "metrics")]
use crate::metrics::MetricsConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Read(#[from] io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

// This is what the AppSettings.toml file is parsed into, every section is
// optional and falls back to its defaults. DATABASE_URL, PORT and RUST_LOG
// from the environment take precedence over the file.
#[derive(Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_rust_log")]
    pub rust_log: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub loki: Option<LokiConfig>,
    #[cfg(feature = "metrics")]
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Deserialize)]
pub struct LokiConfig {
    pub url: String,
    pub service_name: String,
}

fn default_rust_log() -> String {
    "info".to_string()
}

fn default_api_url() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rust_log: default_rust_log(),
            api: ApiConfig::default(),
            database: DatabaseConfig::default(),
            loki: None,
            #[cfg(feature = "metrics")]
            metrics: MetricsConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Reads the config file (defaults when it does not exist), then applies
    /// the process environment on top.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut config = match tokio::fs::read_to_string(path.as_ref()).await {
            Ok(contents) => Self::from_toml(&contents)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => return Err(err.into()),
        };

        config.apply_env(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(url) = var("DATABASE_URL") {
            self.database.url = url;
        }

        if let Some(port) = var("PORT") {
            self.api.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }

        if let Some(rust_log) = var("RUST_LOG") {
            self.rust_log = rust_log;
        }

        Ok(())
    }
}
