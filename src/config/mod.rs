//! Configuration management for the flight delay service

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::CacheTtl;
use crate::error::{ConfigError, Result};
use crate::service::CachePolicy;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote delay scorer
    pub scorer_url: String,

    /// Timeout for a single scorer call, in seconds
    pub scorer_timeout_secs: u64,

    /// Path to the airport reference CSV
    pub airports_path: PathBuf,

    /// Address the HTTP server binds to
    pub bind_address: SocketAddr,

    /// Cache retention settings
    pub cache: CacheSettings,
}

/// Cache retention settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// How long a prediction stays cached
    pub prediction_ttl_secs: u64,

    /// How long the airport listing stays cached
    pub airport_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            prediction_ttl_secs: CacheTtl::PREDICTION.as_secs(),
            airport_ttl_secs: CacheTtl::AIRPORTS.as_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scorer_url: "http://localhost:5108".to_string(),
            scorer_timeout_secs: 30,
            airports_path: PathBuf::from("data/airports.csv"),
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cache: CacheSettings::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or(ConfigError::Invalid(
            "Could not determine config directory".to_string(),
        ))?;

        Ok(base.join("flightdelay").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// An explicit path must exist. A missing default file means "use defaults".
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default_path = Self::default_path()?;
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Apply CLI / environment overrides on top of the file values
    pub fn apply_overrides(
        &mut self,
        scorer_url: Option<&str>,
        airports_path: Option<&str>,
        bind_address: Option<SocketAddr>,
    ) {
        if let Some(url) = scorer_url {
            self.scorer_url = url.to_string();
        }
        if let Some(path) = airports_path {
            self.airports_path = PathBuf::from(path);
        }
        if let Some(addr) = bind_address {
            self.bind_address = addr;
        }
    }

    /// Validate that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.scorer_url.starts_with("http://") || self.scorer_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "scorer_url must be an http(s) URL, got '{}'",
                self.scorer_url
            ))
            .into());
        }
        if self.scorer_timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("scorer_timeout_secs must be positive".to_string()).into(),
            );
        }
        if self.cache.prediction_ttl_secs == 0 || self.cache.airport_ttl_secs == 0 {
            return Err(ConfigError::Invalid("cache TTLs must be positive".to_string()).into());
        }
        Ok(())
    }

    pub fn scorer_timeout(&self) -> Duration {
        Duration::from_secs(self.scorer_timeout_secs)
    }

    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy {
            prediction_ttl: Duration::from_secs(self.cache.prediction_ttl_secs),
            airport_ttl: Duration::from_secs(self.cache.airport_ttl_secs),
        }
    }
}
