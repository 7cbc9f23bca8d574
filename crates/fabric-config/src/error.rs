//! Configuration errors.

use fabric_common::FabricError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`crate::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read
    #[error("Failed to read configuration file {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A value is out of range or malformed
    #[error("Invalid configuration value for '{field}': {message}")]
    Validation {
        /// Dotted key of the offending value
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// Create a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ConfigError> for FabricError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("configuration rejected", err)
    }
}

/// Result alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
