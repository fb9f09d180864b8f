//! Token-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, PropertyId};

/// Minting errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Cannot mint against unknown property: {0}")]
    PropertyNotFound(PropertyId),

    /// Raised only when one-token-per-property is enabled.
    #[error("A token has already been minted for property {0}")]
    AlreadyMinted(PropertyId),

    #[error("Could not draw an unused token id after {attempts} attempts")]
    IdExhausted { attempts: u32 },
}

impl TokenError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TokenError::PropertyNotFound(_) => ErrorCode::PropertyNotFound,
            TokenError::AlreadyMinted(_) => ErrorCode::TokenAlreadyMinted,
            TokenError::IdExhausted { .. } => ErrorCode::TokenIdExhausted,
        }
    }
}
