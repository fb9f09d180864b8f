//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the tokenization domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{require_amount, require_text, ErrorCode, ValidationError};
pub use ids::{ComparableId, PropertyId, TokenId, UserId};
pub use timestamp::Timestamp;
