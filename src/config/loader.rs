//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::DashboardConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DashboardConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<DashboardConfig, ConfigError> {
    let config: DashboardConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Command-line values that replace file settings.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `api.base_url`
    pub api_url: Option<String>,
    /// `server.bind_address`
    pub bind_address: Option<String>,
    /// `server.seed_path`
    pub seed_path: Option<String>,
}

/// Apply overrides, then validate the result again.
pub fn apply_overrides(
    mut config: DashboardConfig,
    overrides: ConfigOverrides,
) -> Result<DashboardConfig, ConfigError> {
    if let Some(url) = overrides.api_url {
        config.api.base_url = url;
    }
    if let Some(bind) = overrides.bind_address {
        config.server.bind_address = bind;
    }
    if let Some(seed) = overrides.seed_path {
        config.server.seed_path = Some(seed);
    }
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load the file when given, defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(DashboardConfig::default()),
    }
}
