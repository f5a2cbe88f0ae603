//! Error types for form field generation

use thiserror::Error;

use formsmith_fields::FieldsError;

/// Result type for form generation operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors that can occur while resolving or rendering a field
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Caller asked for a display type the underlying type cannot support
    #[error("display type '{display_type}' cannot be applied to a {underlying} field")]
    ConfigurationConflict {
        display_type: String,
        underlying: String,
    },

    /// The runtime value disagrees with the declared underlying type
    #[error("field '{field}' expects {expected} but its value is {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// Field schema error (missing or malformed identity)
    #[error(transparent)]
    Fields(#[from] FieldsError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::ConfigurationConflict {
            display_type: "list".into(),
            underlying: "text".into(),
        };
        assert_eq!(
            err.to_string(),
            "display type 'list' cannot be applied to a text field"
        );

        let err = FormError::TypeMismatch {
            field: "Customer.Tags".into(),
            expected: "a collection".into(),
            actual: "a single value".into(),
        };
        assert!(err.to_string().contains("Customer.Tags"));
        assert!(err.to_string().contains("a collection"));
    }
}
