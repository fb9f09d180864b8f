//! Session command handlers.

mod login;
mod provision_administrator;

pub use login::{LoginCommand, LoginHandler, LoginResult};
pub use provision_administrator::{
    ProvisionAdministratorCommand, ProvisionAdministratorHandler, ProvisionAdministratorResult,
};
