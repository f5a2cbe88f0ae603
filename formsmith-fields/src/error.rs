//! Error types for field schema operations

use thiserror::Error;

/// Result type for field schema operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while constructing field schema values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldsError {
    /// Field created with no bindable property path
    #[error("field has no bindable property path")]
    MissingIdentity,

    /// Property path is malformed (empty segment, leading/trailing dot)
    #[error("invalid property path: {path}")]
    InvalidPath { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FieldsError::MissingIdentity.to_string(),
            "field has no bindable property path"
        );
        let err = FieldsError::InvalidPath {
            path: "Customer..Name".into(),
        };
        assert_eq!(err.to_string(), "invalid property path: Customer..Name");
    }
}
