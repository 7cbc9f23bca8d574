//! Router error types

use thiserror::Error;

/// Errors surfaced by router consumers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A router consumer was created in a scope with no router provided
    #[error("{consumer} must be used within a scope that provides a Router")]
    MissingRouter {
        /// Name of the consumer that failed
        consumer: &'static str,
    },
}

/// Result type for router operations
pub type RouterResult<T> = Result<T, RouterError>;
