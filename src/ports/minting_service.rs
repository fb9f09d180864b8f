//! Minting Service Port - Interface for token issuance.
//!
//! The in-repo implementation only generates an identifier; on-chain
//! issuance would live behind the same trait.

use crate::domain::property::Property;
use crate::domain::token::Token;
use crate::domain::user::User;

/// Port for minting a token for `owner` against `property`.
///
/// Implementations must return a fresh, non-empty token id on every call.
/// They do not check for earlier tokens on the same property.
pub trait MintingService: Send + Sync {
    fn mint(&self, owner: &User, property: &Property) -> Token;
}
