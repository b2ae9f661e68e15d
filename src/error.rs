//! Error types for the rating library
//!
//! Fallible operations return the anyhow-based [`Result`] alias with an
//! [`EloError`] as the root cause, so callers can `downcast_ref` when they
//! need to branch on the failure.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for rating configuration and input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EloError {
    #[error("Configuration error in `{field}`: {message}")]
    ConfigurationError { field: String, message: String },

    #[error("Invalid match result: {value}")]
    InvalidResult { value: String },
}

impl EloError {
    /// Shorthand for a configuration error on a named field
    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
