//! Error types and utilities for the Automation Fabric site

use thiserror::Error;

/// Result type alias for shared operations
pub type FabricResult<T> = std::result::Result<T, FabricError>;

/// Boxed source error carried by the structured variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type shared by the site crates
#[derive(Error, Debug)]
pub enum FabricError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted preference storage errors
    #[error("Storage error: {message}")]
    Storage {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
        /// Offending field, if known
        field: Option<String>,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<BoxedSource>,
    },
}

impl FabricError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a storage error with source
    pub fn storage_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>, field: Option<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field,
        }
    }

    /// Whether this error came from the preference store
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            FabricError::config("missing key").to_string(),
            "Configuration error: missing key"
        );
        assert_eq!(FabricError::new("plain").to_string(), "plain");
        assert_eq!(
            FabricError::validation("bad value", Some("theme.storage_key".into())).to_string(),
            "Validation error: bad value"
        );
    }

    #[test]
    fn test_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FabricError::storage_with_source("write failed", io);
        assert!(err.is_storage());
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("denied"));
    }

    #[test]
    fn test_from_io() {
        let err: FabricError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, FabricError::Io(_)));
    }
}
