//! ProvisionAdministratorHandler - Privileged creation of administrator accounts.
//!
//! This is the only path that grants the administrator role to an account
//! whose name does not follow the administrator naming policy.

use std::sync::Arc;

use crate::application::persistence::{persist, PersistenceWarning};
use crate::application::AppState;
use crate::domain::foundation::require_text;
use crate::domain::user::{IdentityError, Role, User};
use crate::ports::{CollectionKey, CollectionStore};

/// Command to create or promote an administrator.
#[derive(Debug, Clone)]
pub struct ProvisionAdministratorCommand {
    pub name: String,
    pub phone: String,
}

/// Result of provisioning.
#[derive(Debug, Clone)]
pub struct ProvisionAdministratorResult {
    pub user: User,
    /// False when an existing account was promoted (or already admin).
    pub created: bool,
    pub warning: Option<PersistenceWarning>,
}

/// Handler for provisioning administrators.
pub struct ProvisionAdministratorHandler {
    store: Arc<dyn CollectionStore>,
}

impl ProvisionAdministratorHandler {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        state: &mut AppState,
        cmd: ProvisionAdministratorCommand,
    ) -> Result<ProvisionAdministratorResult, IdentityError> {
        require_text("name", &cmd.name)?;
        require_text("phone", &cmd.phone)?;

        if let Some(existing) = state.users.iter_mut().find(|u| u.phone() == cmd.phone) {
            if existing.name() != cmd.name {
                return Err(IdentityError::Mismatch);
            }
            if existing.role() == Some(Role::Administrator) {
                return Ok(ProvisionAdministratorResult {
                    user: existing.clone(),
                    created: false,
                    warning: None,
                });
            }
            existing.promote_to_administrator();
            let user = existing.clone();
            tracing::info!(user_id = %user.id(), "User promoted to administrator");

            // The open session carries its own copy of the user
            if let Some(session) = state.session.as_mut() {
                if session.user().id() == user.id() {
                    session.refresh_user(user.clone());
                }
            }
            let warning = persist(self.store.as_ref(), CollectionKey::Users, &state.users).await;
            return Ok(ProvisionAdministratorResult {
                user,
                created: false,
                warning,
            });
        }

        let user = User::new(cmd.name, cmd.phone, Role::Administrator)?;
        state.users.push(user.clone());
        tracing::info!(user_id = %user.id(), "Administrator provisioned");
        let warning = persist(self.store.as_ref(), CollectionKey::Users, &state.users).await;

        Ok(ProvisionAdministratorResult {
            user,
            created: true,
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCollectionStore;
    use crate::domain::user::{RolePolicy, Session};

    fn cmd(name: &str, phone: &str) -> ProvisionAdministratorCommand {
        ProvisionAdministratorCommand {
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn creates_administrator_with_any_name() {
        let store = InMemoryCollectionStore::new();
        let handler = ProvisionAdministratorHandler::new(Arc::new(store.clone()));
        let mut state = AppState::default();

        let result = handler.handle(&mut state, cmd("Marta", "1")).await.unwrap();

        assert!(result.created);
        assert_eq!(result.user.role(), Some(Role::Administrator));
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn promotes_existing_standard_user() {
        let store = InMemoryCollectionStore::new();
        let handler = ProvisionAdministratorHandler::new(Arc::new(store.clone()));
        let user = User::new("Marta", "1", Role::Standard).unwrap();
        let mut state = AppState::new(vec![user.clone()], Default::default(), Default::default());

        let result = handler.handle(&mut state, cmd("Marta", "1")).await.unwrap();

        assert!(!result.created);
        assert_eq!(result.user.id(), user.id());
        assert_eq!(state.users()[0].role(), Some(Role::Administrator));
        assert_eq!(state.users().len(), 1);
    }

    #[tokio::test]
    async fn promoting_logged_in_user_updates_session() {
        let store = InMemoryCollectionStore::new();
        let handler = ProvisionAdministratorHandler::new(Arc::new(store.clone()));
        let user = User::new("Marta", "1", Role::Standard).unwrap();
        let mut state = AppState::new(vec![user.clone()], Default::default(), Default::default());
        state.session = Some(Session::open(user, &RolePolicy::default()));

        handler.handle(&mut state, cmd("Marta", "1")).await.unwrap();

        let session = state.session().unwrap();
        assert!(session.is_administrator());
        assert_eq!(session.user().role(), Some(Role::Administrator));
    }

    #[tokio::test]
    async fn promoting_someone_else_leaves_session_alone() {
        let store = InMemoryCollectionStore::new();
        let handler = ProvisionAdministratorHandler::new(Arc::new(store.clone()));
        let marta = User::new("Marta", "1", Role::Standard).unwrap();
        let ana = User::new("Ana", "2", Role::Standard).unwrap();
        let mut state = AppState::new(vec![marta, ana.clone()], Default::default(), Default::default());
        state.session = Some(Session::open(ana, &RolePolicy::default()));

        handler.handle(&mut state, cmd("Marta", "1")).await.unwrap();

        assert!(!state.session().unwrap().is_administrator());
    }

    #[tokio::test]
    async fn existing_administrator_is_left_alone() {
        let store = InMemoryCollectionStore::new();
        let handler = ProvisionAdministratorHandler::new(Arc::new(store.clone()));
        let user = User::new("Marta", "1", Role::Administrator).unwrap();
        let mut state = AppState::new(vec![user], Default::default(), Default::default());

        handler.handle(&mut state, cmd("Marta", "1")).await.unwrap();

        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn name_mismatch_is_rejected() {
        let store = InMemoryCollectionStore::new();
        let handler = ProvisionAdministratorHandler::new(Arc::new(store));
        let user = User::new("Marta", "1", Role::Standard).unwrap();
        let mut state = AppState::new(vec![user], Default::default(), Default::default());

        let result = handler.handle(&mut state, cmd("Other", "1")).await;

        assert_eq!(result.unwrap_err(), IdentityError::Mismatch);
        assert_eq!(state.users()[0].role(), Some(Role::Standard));
    }
}
