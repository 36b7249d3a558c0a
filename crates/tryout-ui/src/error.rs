//! Error types for Leptos UI components

use thiserror::Error;

/// Errors raised by the UI shell itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A route rendered without one of its parameters
    #[error("missing route parameter '{0}'")]
    MissingRouteParam(&'static str),

    /// The compiled-in API base URL was rejected
    #[error("invalid API configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
