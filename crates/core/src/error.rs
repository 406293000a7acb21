//! Error types for fieldkit
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Scope
//!
//! Errors here cover exactly one taxonomy class: invalid constructor or setter
//! arguments (missing required configuration). These are programmer errors and
//! fail fast at the boundary.
//!
//! Malformed serialized field values are NOT errors. Every decode in
//! `fieldkit-codec` is total: unparsable segments and tokens are dropped and
//! the best-effort structure is returned. Callers must never see an `Err` from
//! a decode path.

use thiserror::Error;

/// Result type alias for fieldkit operations
pub type Result<T> = std::result::Result<T, FieldError>;

/// Error types for field configuration boundaries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A required configuration value was empty or absent
    #[error("required configuration '{0}' is missing or empty")]
    MissingConfiguration(&'static str),

    /// An argument that must not be empty was empty
    #[error("argument '{0}' cannot be empty")]
    EmptyArgument(&'static str),

    /// A string that must be an item identifier was not one
    #[error("not a valid item id: {0:?}")]
    InvalidItemId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_configuration() {
        let err = FieldError::MissingConfiguration("source");
        let msg = err.to_string();
        assert!(msg.contains("source"));
        assert!(msg.contains("missing or empty"));
    }

    #[test]
    fn test_error_display_empty_argument() {
        let err = FieldError::EmptyArgument("item_id");
        assert_eq!(err.to_string(), "argument 'item_id' cannot be empty");
    }

    #[test]
    fn test_error_display_invalid_item_id() {
        let err = FieldError::InvalidItemId("abc".to_string());
        let msg = err.to_string();
        assert!(msg.contains("abc"));
    }
}
