//! Property-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, PropertyId, UserId, ValidationError};

/// Property operation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    #[error("Property not found: {0}")]
    NotFound(PropertyId),

    /// Assignment target does not exist in the user collection.
    #[error("Cannot assign to unknown user: {0}")]
    UnknownUser(UserId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl PropertyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PropertyError::NotFound(_) => ErrorCode::PropertyNotFound,
            PropertyError::UnknownUser(_) => ErrorCode::UserNotFound,
            PropertyError::Validation(err) => err.code(),
        }
    }
}
