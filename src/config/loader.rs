//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::validation::{Validate, ValidationError};

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
pub fn load_config<T>(path: &Path) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Validate,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Run semantic validation, e.g. after CLI overrides were applied.
pub fn validate<T: Validate>(config: &T) -> Result<(), ConfigError> {
    config.validate().map_err(ConfigError::Validation)
}
