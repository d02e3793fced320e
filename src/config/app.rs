//! Main application configuration
//!
//! This module defines the top-level configuration for the standings
//! service: service settings plus the tournament rules, loaded from a TOML
//! file with environment variable overrides.

use crate::config::tournament::TournamentConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceSettings,
    pub tournament: TournamentConfig,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "tournament-standings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build a configuration around a tournament rule set with default service settings
    pub fn new(tournament: TournamentConfig) -> Self {
        Self {
            service: ServiceSettings::default(),
            tournament,
        }
    }

    /// Parse configuration from TOML text, apply environment overrides and validate
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: AppConfig =
            toml::from_str(contents).context("Failed to parse configuration TOML")?;
        config.apply_env_overrides()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Apply environment variable overrides on top of file values
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(name) = env::var("STANDINGS_SERVICE_NAME") {
            if name.is_empty() {
                return Err(anyhow!("Invalid STANDINGS_SERVICE_NAME value: empty"));
            }
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("STANDINGS_LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.tournament.validate()?;

    Ok(())
}
