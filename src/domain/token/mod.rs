//! Token domain module.
//!
//! Tokens are minted against a property for a user and never change.
//! Several tokens may exist for one property unless the one-per-property
//! rule is switched on.

mod aggregate;
mod errors;

pub use aggregate::{Token, TokenLedger};
pub use errors::TokenError;
