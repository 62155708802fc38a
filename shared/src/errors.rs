//! Error types for the Nutrition Coach core

use thiserror::Error;

/// Errors raised by the core computations and the daily log
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CoreError {
    /// Build an `InvalidInput` error prefixed with the user-facing field label
    pub fn invalid_field(field: &str, message: impl AsRef<str>) -> Self {
        let err = crate::validation::ValidationError::new(field, message.as_ref());
        CoreError::InvalidInput(err.user_message())
    }
}

/// Result alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_uses_display_label() {
        let err = CoreError::invalid_field("weight_kg", "must be positive");
        assert_eq!(
            err,
            CoreError::InvalidInput("Weight: must be positive".to_string())
        );
        assert_eq!(err.to_string(), "Invalid input: Weight: must be positive");
    }
}
