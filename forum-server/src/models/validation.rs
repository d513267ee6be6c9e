//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the request
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// String doesn't match required format (e.g., integer id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },

    /// Request body could not be decoded
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::Malformed { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Unwrap a required field, reporting which one was absent.
///
/// Absent and JSON `null` both arrive as `None`. Present values pass
/// through untouched, including empty strings.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "topicId",
            reason: "must be a positive integer",
        };
        assert_eq!(err.to_string(), "topicId: must be a positive integer");
        assert_eq!(
            ValidationError::Missing { field: "author" }.to_string(),
            "author is required"
        );
    }

    #[test]
    fn required_reports_field() {
        assert_eq!(required("title", Some("x")), Ok("x"));
        assert_eq!(
            required::<&str>("title", None),
            Err(ValidationError::Missing { field: "title" })
        );
    }

    #[test]
    fn required_keeps_empty_values() {
        assert_eq!(required("author", Some("")), Ok(""));
    }
}
