//! Global CLI options shared across all commands

use std::net::SocketAddr;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; `resolve_config` folds it over the file.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path
    pub config: Option<String>,

    /// Scorer base URL override
    pub scorer_url: Option<String>,

    /// Airport dataset path override
    pub airports: Option<String>,

    /// Bind address override
    pub bind: Option<SocketAddr>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            scorer_url: cli.scorer_url.clone(),
            airports: cli.airports.clone(),
            bind: cli.bind,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Load the config file, apply overrides and validate the result.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load_at(self.config_ref())?;
        config.apply_overrides(
            self.scorer_url.as_deref(),
            self.airports.as_deref(),
            self.bind,
        );
        config.validate()?;
        Ok(config)
    }
}
