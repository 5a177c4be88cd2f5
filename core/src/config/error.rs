//! Error types for presentation config

use thiserror::Error;

/// Errors while reading the dashboard layout config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse dashboard config")]
    Parse(#[from] toml::de::Error),
}
