//! Shared error types.

use thiserror::Error;

/// Error raised by guard clauses when a caller passes an unusable argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Value cannot be null or empty: {param}")]
    NullOrEmpty { param: &'static str },

    #[error("Value cannot be null or whitespace: {param}")]
    NullOrWhiteSpace { param: &'static str },

    #[error("Value out of range for {param}: {message}")]
    OutOfRange {
        param: &'static str,
        message: String,
    },

    #[error("Invalid value for {param}: {message}")]
    Invalid {
        param: &'static str,
        message: String,
    },
}

impl ArgumentError {
    /// Name of the offending parameter.
    pub fn param(&self) -> &'static str {
        match self {
            ArgumentError::NullOrEmpty { param }
            | ArgumentError::NullOrWhiteSpace { param }
            | ArgumentError::OutOfRange { param, .. }
            | ArgumentError::Invalid { param, .. } => param,
        }
    }
}
