//! TokenizationCore - the coordinating component the presentation layer
//! calls into.
//!
//! Owns the in-memory state and the handlers. Every mutation completes in
//! memory before its single collection write is issued; writes are never
//! batched, so consecutive mutations produce consecutive writes.

use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::adapters::{RandomIdMinter, SubstringSearch, WeightedAverageValuation};
use crate::application::handlers::{
    AcceptAndMintCommand, AcceptAndMintHandler, AcceptAndMintResult, AddComparableCommand,
    AddComparableHandler, AddComparableResult, AssignPropertyCommand, AssignPropertyHandler,
    AssignPropertyResult, CreatePropertyCommand, CreatePropertyHandler, CreatePropertyResult,
    ListPropertiesHandler, ListPropertiesQuery, LoginCommand, LoginHandler, LoginResult,
    ProvisionAdministratorCommand, ProvisionAdministratorHandler, ProvisionAdministratorResult,
    RequestValuationHandler, RequestValuationQuery,
};
use crate::application::AppState;
use crate::config::AppConfig;
use crate::domain::foundation::{ErrorCode, PropertyId, UserId};
use crate::domain::property::{Property, PropertyError};
use crate::domain::token::{Token, TokenError};
use crate::domain::user::{IdentityError, RolePolicy, Session, User};
use crate::ports::{CollectionStore, MintingService, PropertySearch, ValuationResult, ValuationService};

/// Errors surfaced by the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("No user is logged in")]
    NotAuthenticated,
}

impl CoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::Identity(err) => err.code(),
            CoreError::Property(err) => err.code(),
            CoreError::Token(err) => err.code(),
            CoreError::NotAuthenticated => ErrorCode::NotAuthenticated,
        }
    }
}

/// The pluggable services.
#[derive(Clone)]
pub struct CoreServices {
    pub search: Arc<dyn PropertySearch>,
    pub valuation: Arc<dyn ValuationService>,
    pub minter: Arc<dyn MintingService>,
}

impl Default for CoreServices {
    fn default() -> Self {
        Self {
            search: Arc::new(SubstringSearch::new()),
            valuation: Arc::new(WeightedAverageValuation::default()),
            minter: Arc::new(RandomIdMinter::default()),
        }
    }
}

impl CoreServices {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            search: Arc::new(SubstringSearch::new()),
            valuation: Arc::new(WeightedAverageValuation::new(config.valuation.default_base)),
            minter: Arc::new(RandomIdMinter::new(
                config.minting.token_prefix.clone(),
                config.minting.suffix_length,
            )),
        }
    }
}

/// Behavioral switches.
#[derive(Debug, Clone, Default)]
pub struct CoreOptions {
    pub role_policy: RolePolicy,
    pub one_token_per_property: bool,
}

impl CoreOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            role_policy: RolePolicy::new(config.identity.administrator_name.clone()),
            one_token_per_property: config.minting.one_token_per_property,
        }
    }
}

/// Single owner of the users, properties and tokens collections.
pub struct TokenizationCore {
    state: AppState,
    login: LoginHandler,
    provision: ProvisionAdministratorHandler,
    create_property: CreatePropertyHandler,
    assign_property: AssignPropertyHandler,
    add_comparable: AddComparableHandler,
    list_properties: ListPropertiesHandler,
    request_valuation: RequestValuationHandler,
    accept_and_mint: AcceptAndMintHandler,
}

impl TokenizationCore {
    /// Loads state from `store` and wires the handlers.
    pub async fn hydrate(
        store: Arc<dyn CollectionStore>,
        services: CoreServices,
        options: CoreOptions,
    ) -> Self {
        let state = AppState::hydrate(store.as_ref()).await;
        Self {
            state,
            login: LoginHandler::new(store.clone(), options.role_policy),
            provision: ProvisionAdministratorHandler::new(store.clone()),
            create_property: CreatePropertyHandler::new(store.clone()),
            assign_property: AssignPropertyHandler::new(store.clone()),
            add_comparable: AddComparableHandler::new(store.clone()),
            list_properties: ListPropertiesHandler::new(services.search),
            request_valuation: RequestValuationHandler::new(services.valuation),
            accept_and_mint: AcceptAndMintHandler::new(
                store,
                services.minter,
                options.one_token_per_property,
            ),
        }
    }

    pub async fn from_config(config: &AppConfig, store: Arc<dyn CollectionStore>) -> Self {
        Self::hydrate(
            store,
            CoreServices::from_config(config),
            CoreOptions::from_config(config),
        )
        .await
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    // === Session ===

    pub async fn login(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<LoginResult, CoreError> {
        let cmd = LoginCommand {
            name: name.into(),
            phone: phone.into(),
        };
        Ok(self.login.handle(&mut self.state, cmd).await?)
    }

    /// Clears the session. Collections are untouched.
    pub fn logout(&mut self) {
        if let Some(session) = self.state.session.take() {
            tracing::info!(user_id = %session.user().id(), "Logged out");
        }
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub async fn provision_administrator(
        &mut self,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<ProvisionAdministratorResult, CoreError> {
        let cmd = ProvisionAdministratorCommand {
            name: name.into(),
            phone: phone.into(),
        };
        Ok(self.provision.handle(&mut self.state, cmd).await?)
    }

    pub fn list_users(&self) -> &[User] {
        self.state.users()
    }

    // === Properties ===

    pub fn list_properties(&self, filter: Option<&str>) -> Vec<Property> {
        self.list_properties.handle(
            &self.state,
            ListPropertiesQuery {
                filter: filter.map(str::to_string),
            },
        )
    }

    pub fn get_property(&self, property_id: &PropertyId) -> Option<&Property> {
        self.state.properties().get(property_id)
    }

    pub fn list_assigned_properties(&self, user_id: &UserId) -> Vec<Property> {
        self.state
            .properties()
            .assigned_to(user_id)
            .cloned()
            .collect()
    }

    pub async fn create_property(
        &mut self,
        title: impl Into<String>,
        address: impl Into<String>,
        estimated_value: f64,
        assigned_to: Option<UserId>,
    ) -> Result<CreatePropertyResult, CoreError> {
        self.create_property_with_metadata(title, address, estimated_value, assigned_to, Map::new())
            .await
    }

    pub async fn create_property_with_metadata(
        &mut self,
        title: impl Into<String>,
        address: impl Into<String>,
        estimated_value: f64,
        assigned_to: Option<UserId>,
        metadata: Map<String, Value>,
    ) -> Result<CreatePropertyResult, CoreError> {
        let cmd = CreatePropertyCommand {
            title: title.into(),
            address: address.into(),
            estimated_value,
            assigned_to,
            metadata,
        };
        Ok(self.create_property.handle(&mut self.state, cmd).await?)
    }

    pub async fn assign_property(
        &mut self,
        property_id: PropertyId,
        user_id: UserId,
    ) -> Result<AssignPropertyResult, CoreError> {
        let cmd = AssignPropertyCommand {
            property_id,
            user_id,
        };
        Ok(self.assign_property.handle(&mut self.state, cmd).await?)
    }

    pub async fn add_comparable(
        &mut self,
        property_id: PropertyId,
        value: f64,
    ) -> Result<AddComparableResult, CoreError> {
        let cmd = AddComparableCommand { property_id, value };
        Ok(self.add_comparable.handle(&mut self.state, cmd).await?)
    }

    // === Valuation and tokens ===

    pub fn request_valuation(&self, property_id: PropertyId) -> Result<ValuationResult, CoreError> {
        Ok(self
            .request_valuation
            .handle(&self.state, RequestValuationQuery { property_id })?)
    }

    /// Mints a token for the logged-in user.
    pub async fn accept_and_mint(
        &mut self,
        property_id: PropertyId,
    ) -> Result<AcceptAndMintResult, CoreError> {
        let owner = self
            .state
            .session()
            .map(|s| s.user().clone())
            .ok_or(CoreError::NotAuthenticated)?;
        self.accept_and_mint_for(property_id, owner).await
    }

    /// Mints a token for an explicit owner.
    pub async fn accept_and_mint_for(
        &mut self,
        property_id: PropertyId,
        owner: User,
    ) -> Result<AcceptAndMintResult, CoreError> {
        let cmd = AcceptAndMintCommand { property_id, owner };
        Ok(self.accept_and_mint.handle(&mut self.state, cmd).await?)
    }

    pub fn list_tokens(&self) -> &[Token] {
        self.state.tokens().as_slice()
    }

    pub fn tokens_for_owner(&self, user_id: &UserId) -> Vec<Token> {
        self.state.tokens().for_owner(user_id).cloned().collect()
    }

    pub fn tokens_for_property(&self, property_id: &PropertyId) -> Vec<Token> {
        self.state
            .tokens()
            .for_property(property_id)
            .cloned()
            .collect()
    }
}
