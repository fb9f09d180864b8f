//! Token entity.
//!
//! A token records that a user accepted a property's valuation and minted
//! a share of it. Tokens are immutable once created.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PropertyId, Timestamp, TokenId, UserId};
use crate::domain::user::User;

/// A minted token.
///
/// `owner` is a copy of the user taken at mint time, not a live reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    id: TokenId,
    owner: User,
    property_id: PropertyId,
    minted_at: Timestamp,
}

impl Token {
    /// Stamps a new token with the current time.
    pub fn new(id: TokenId, owner: &User, property_id: PropertyId) -> Self {
        Self {
            id,
            owner: owner.clone(),
            property_id,
            minted_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &TokenId {
        &self.id
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn owner_id(&self) -> &UserId {
        self.owner.id()
    }

    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    pub fn minted_at(&self) -> &Timestamp {
        &self.minted_at
    }
}

/// All minted tokens in mint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenLedger {
    tokens: Vec<Token>,
}

impl TokenLedger {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, id: &TokenId) -> bool {
        self.tokens.iter().any(|t| t.id() == id)
    }

    pub fn record(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn for_owner<'a>(&'a self, user_id: &'a UserId) -> impl Iterator<Item = &'a Token> {
        self.tokens.iter().filter(move |t| t.owner_id() == user_id)
    }

    pub fn for_property<'a>(
        &'a self,
        property_id: &'a PropertyId,
    ) -> impl Iterator<Item = &'a Token> {
        self.tokens
            .iter()
            .filter(move |t| t.property_id() == property_id)
    }
}
