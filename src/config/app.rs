//! Main application configuration
//!
//! This module defines the top-level configuration for the `elo-rank` tool,
//! including environment variable loading, TOML files and validation.

use crate::config::rating::RatingOptions;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingOptions,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "elo-rank".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        if let Ok(rank) = env::var("ELO_DEFAULT_RANK") {
            config.rating.default_rank = rank
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_DEFAULT_RANK value: {}", rank))?;
        }
        if let Ok(limits) = env::var("ELO_RANK_LIMITS") {
            config.rating.proficiency_map.rank_limits = parse_list(&limits)
                .ok_or_else(|| anyhow!("Invalid ELO_RANK_LIMITS value: {}", limits))?;
        }
        if let Ok(coefficients) = env::var("ELO_COEFFICIENTS") {
            config.rating.proficiency_map.coefficients = parse_list(&coefficients)
                .ok_or_else(|| anyhow!("Invalid ELO_COEFFICIENTS value: {}", coefficients))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing sections use defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to load config file {}", path.display()))?;
        Ok(config)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Invalid TOML configuration")?;
        validate_config(&config)?;
        Ok(config)
    }
}

/// Parse a comma separated list of exactly `N` values
fn parse_list<T: FromStr, const N: usize>(value: &str) -> Option<[T; N]> {
    let parsed = value
        .split(',')
        .map(|part| part.trim().parse::<T>().ok())
        .collect::<Option<Vec<T>>>()?;

    parsed.try_into().ok()
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.rating.validate()
}
