//! AcceptAndMintHandler - Command handler for accepting a valuation and
//! minting a token against it.

use std::sync::Arc;

use crate::application::persistence::{persist, PersistenceWarning};
use crate::application::AppState;
use crate::domain::foundation::PropertyId;
use crate::domain::token::{Token, TokenError};
use crate::domain::user::User;
use crate::ports::{CollectionKey, CollectionStore, MintingService};

/// Draws allowed before giving up on an unused token id.
pub const MAX_MINT_ATTEMPTS: u32 = 8;

/// Command to mint a token for `owner`.
#[derive(Debug, Clone)]
pub struct AcceptAndMintCommand {
    pub property_id: PropertyId,
    pub owner: User,
}

/// Result of a successful mint.
#[derive(Debug, Clone)]
pub struct AcceptAndMintResult {
    pub token: Token,
    pub warning: Option<PersistenceWarning>,
}

/// Handler for minting.
pub struct AcceptAndMintHandler {
    store: Arc<dyn CollectionStore>,
    minter: Arc<dyn MintingService>,
    one_token_per_property: bool,
}

impl AcceptAndMintHandler {
    pub fn new(
        store: Arc<dyn CollectionStore>,
        minter: Arc<dyn MintingService>,
        one_token_per_property: bool,
    ) -> Self {
        Self {
            store,
            minter,
            one_token_per_property,
        }
    }

    pub async fn handle(
        &self,
        state: &mut AppState,
        cmd: AcceptAndMintCommand,
    ) -> Result<AcceptAndMintResult, TokenError> {
        // 1. Property must exist
        let property = state
            .properties
            .get(&cmd.property_id)
            .ok_or(TokenError::PropertyNotFound(cmd.property_id))?;

        if self.one_token_per_property && state.tokens.for_property(&cmd.property_id).next().is_some() {
            return Err(TokenError::AlreadyMinted(cmd.property_id));
        }

        // 2. Mint, redrawing on id collision
        let mut minted = None;
        for _ in 0..MAX_MINT_ATTEMPTS {
            let token = self.minter.mint(&cmd.owner, property);
            if !state.tokens.contains(token.id()) {
                minted = Some(token);
                break;
            }
            tracing::warn!(token_id = %token.id(), "Token id collision, redrawing");
        }
        let token = minted.ok_or(TokenError::IdExhausted {
            attempts: MAX_MINT_ATTEMPTS,
        })?;

        // 3. Record and persist
        state.tokens.record(token.clone());
        tracing::info!(
            token_id = %token.id(),
            property_id = %cmd.property_id,
            owner_id = %token.owner_id(),
            "Token minted"
        );
        let warning = persist(self.store.as_ref(), CollectionKey::Tokens, &state.tokens).await;

        Ok(AcceptAndMintResult { token, warning })
    }
}
