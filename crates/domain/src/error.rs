//! Domain error types.

use shared::ArgumentError;
use thiserror::Error;

/// Errors raised by model operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("No item with key '{0}' exists")]
    NotFound(String),

    #[error("An item with key '{0}' already exists")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_from_argument_error() {
        let err: ModelError = ArgumentError::NullOrEmpty { param: "alias" }.into();
        assert!(matches!(err, ModelError::Argument(_)));
        assert_eq!(err.to_string(), "Value cannot be null or empty: alias");
    }

    #[test]
    fn test_model_error_messages() {
        assert_eq!(
            ModelError::NotFound("title".into()).to_string(),
            "No item with key 'title' exists"
        );
        assert_eq!(
            ModelError::Duplicate("title".into()).to_string(),
            "An item with key 'title' already exists"
        );
    }
}
