//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be a finite, non-negative number, got {actual}")]
    InvalidAmount { field: String, actual: f64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid amount validation error.
    pub fn invalid_amount(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::InvalidAmount {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the stable error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidAmount { .. } => ErrorCode::InvalidAmount,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Rejects empty or whitespace-only text.
pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

/// Rejects NaN, infinite and negative amounts.
pub fn require_amount(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::invalid_amount(field, value));
    }
    Ok(())
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    InvalidAmount,
    InvalidFormat,

    // Identity errors
    IdentityMismatch,
    NotAuthenticated,

    // Not found errors
    UserNotFound,
    PropertyNotFound,

    // Minting errors
    TokenAlreadyMinted,
    TokenIdExhausted,

    // Storage errors
    StorageReadError,
    StorageWriteError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidAmount => "INVALID_AMOUNT",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::IdentityMismatch => "IDENTITY_MISMATCH",
            ErrorCode::NotAuthenticated => "NOT_AUTHENTICATED",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::PropertyNotFound => "PROPERTY_NOT_FOUND",
            ErrorCode::TokenAlreadyMinted => "TOKEN_ALREADY_MINTED",
            ErrorCode::TokenIdExhausted => "TOKEN_ID_EXHAUSTED",
            ErrorCode::StorageReadError => "STORAGE_READ_ERROR",
            ErrorCode::StorageWriteError => "STORAGE_WRITE_ERROR",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
        assert_eq!(err.code(), ErrorCode::EmptyField);
    }

    #[test]
    fn validation_error_invalid_amount_displays_correctly() {
        let err = ValidationError::invalid_amount("estimated_value", -5.0);
        assert_eq!(
            format!("{}", err),
            "Field 'estimated_value' must be a finite, non-negative number, got -5"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("phone", "contains no digits");
        assert_eq!(
            format!("{}", err),
            "Field 'phone' has invalid format: contains no digits"
        );
    }

    #[test]
    fn require_text_rejects_whitespace() {
        assert!(require_text("title", "  \t").is_err());
        assert!(require_text("title", "Loft").is_ok());
    }

    #[test]
    fn require_amount_accepts_zero_and_rejects_negative_or_nan() {
        assert!(require_amount("value", 0.0).is_ok());
        assert!(require_amount("value", 250_000.0).is_ok());
        assert!(require_amount("value", -1.0).is_err());
        assert!(require_amount("value", f64::NAN).is_err());
        assert!(require_amount("value", f64::INFINITY).is_err());
    }

    #[test]
    fn error_code_displays_screaming_snake_case() {
        assert_eq!(ErrorCode::IdentityMismatch.to_string(), "IDENTITY_MISMATCH");
        assert_eq!(ErrorCode::StorageWriteError.to_string(), "STORAGE_WRITE_ERROR");
    }
}
