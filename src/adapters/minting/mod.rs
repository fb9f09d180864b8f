//! Minting Adapters
//!
//! - **RandomIdMinter** - Prefix plus random suffix, no external issuance

mod random_id_minter;

pub use random_id_minter::{RandomIdMinter, DEFAULT_SUFFIX_LENGTH, DEFAULT_TOKEN_PREFIX};
