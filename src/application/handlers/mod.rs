//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each
//! command handler mutates `AppState` and then writes the one collection
//! it changed.

pub mod property;
pub mod session;
pub mod token;
pub mod valuation;

pub use property::{
    AddComparableCommand, AddComparableHandler, AddComparableResult, AssignPropertyCommand,
    AssignPropertyHandler, AssignPropertyResult, CreatePropertyCommand, CreatePropertyHandler,
    CreatePropertyResult, ListPropertiesHandler, ListPropertiesQuery,
};
pub use session::{
    LoginCommand, LoginHandler, LoginResult, ProvisionAdministratorCommand,
    ProvisionAdministratorHandler, ProvisionAdministratorResult,
};
pub use token::{AcceptAndMintCommand, AcceptAndMintHandler, AcceptAndMintResult, MAX_MINT_ATTEMPTS};
pub use valuation::{RequestValuationHandler, RequestValuationQuery};
