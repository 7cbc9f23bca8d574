//! Application-wide error types using thiserror.

use fabric_common::FabricError;
use fabric_config::ConfigError;
use fabric_i18n::I18nError;
use fabric_router::RouterError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Copy catalog error.
    #[error("Localization error: {0}")]
    I18n(#[from] I18nError),

    /// Router wiring error.
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// Shared infrastructure error.
    #[error(transparent)]
    Fabric(#[from] FabricError),

    /// A preview command could not be understood.
    #[error("Invalid command: {0}")]
    Command(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the site application.
pub type SiteResult<T> = Result<T, SiteError>;
