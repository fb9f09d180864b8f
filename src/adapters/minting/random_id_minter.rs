//! Random-identifier minting.
//!
//! Issues tokens whose id is a fixed prefix followed by an uppercase
//! alphanumeric suffix, e.g. `RWA-Q7ZK2M4XA`. Nothing is written on-chain.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::domain::foundation::TokenId;
use crate::domain::property::Property;
use crate::domain::token::Token;
use crate::domain::user::User;
use crate::ports::MintingService;

pub const DEFAULT_TOKEN_PREFIX: &str = "RWA-";
pub const DEFAULT_SUFFIX_LENGTH: usize = 9;

/// Mints tokens with random identifiers.
#[derive(Debug, Clone)]
pub struct RandomIdMinter {
    prefix: String,
    suffix_length: usize,
}

impl RandomIdMinter {
    /// A zero suffix length is raised to one so ids are never bare prefixes.
    pub fn new(prefix: impl Into<String>, suffix_length: usize) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_length: suffix_length.max(1),
        }
    }

    fn next_id(&self) -> TokenId {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.suffix_length)
            .map(|b| char::from(b).to_ascii_uppercase())
            .collect();
        TokenId::from_parts(&self.prefix, &suffix)
    }
}

impl Default for RandomIdMinter {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_PREFIX, DEFAULT_SUFFIX_LENGTH)
    }
}

impl MintingService for RandomIdMinter {
    fn mint(&self, owner: &User, property: &Property) -> Token {
        Token::new(self.next_id(), owner, *property.id())
    }
}
