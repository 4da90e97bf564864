//! Reading a site description from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::site::SiteConfig;

/// Errors that can occur when loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid JSON in config: {0}")]
    InvalidJson(String),

    #[error("Config must be a JSON object")]
    NotObject,

    #[error("Invalid config: {0}")]
    InvalidField(String),
}

/// Load a site description from a JSON file.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let source = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_config(&source)
}

/// Parse a site description from JSON text.
///
/// The root must be an object; section fields are validated here so that
/// rendering never has to re-check types.
pub fn parse_config(source: &str) -> Result<SiteConfig, ConfigError> {
    let value: Value =
        serde_json::from_str(source).map_err(|e| ConfigError::InvalidJson(e.to_string()))?;

    if !value.is_object() {
        return Err(ConfigError::NotObject);
    }

    serde_json::from_value(value).map_err(|e| ConfigError::InvalidField(e.to_string()))
}
