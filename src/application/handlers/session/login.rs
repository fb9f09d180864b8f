//! LoginHandler - Command handler for the (name, phone) login.

use std::sync::Arc;

use crate::application::persistence::{persist, PersistenceWarning};
use crate::application::AppState;
use crate::domain::user::{resolve_identity, IdentityError, RolePolicy, Session};
use crate::ports::{CollectionKey, CollectionStore};

/// Command to log in, registering the user on first sight of the phone.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub name: String,
    pub phone: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub session: Session,
    pub is_new_user: bool,
    pub warning: Option<PersistenceWarning>,
}

/// Handler for logging in.
pub struct LoginHandler {
    store: Arc<dyn CollectionStore>,
    policy: RolePolicy,
}

impl LoginHandler {
    pub fn new(store: Arc<dyn CollectionStore>, policy: RolePolicy) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        state: &mut AppState,
        cmd: LoginCommand,
    ) -> Result<LoginResult, IdentityError> {
        // 1. Resolve identity against known users
        let resolved = resolve_identity(&cmd.name, &cmd.phone, &state.users, &self.policy);
        let resolution = match resolved {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::info!(code = %err.code(), "Login rejected");
                return Err(err);
            }
        };

        // 2. Register and persist new users
        let mut warning = None;
        if resolution.is_new_user {
            state.users.push(resolution.user.clone());
            tracing::info!(user_id = %resolution.user.id(), "User registered");
            warning = persist(self.store.as_ref(), CollectionKey::Users, &state.users).await;
        }

        // 3. Open session
        let session = Session::open(resolution.user, &self.policy);
        tracing::debug!(
            user_id = %session.user().id(),
            role = %session.role(),
            "Session opened"
        );
        state.session = Some(session.clone());

        Ok(LoginResult {
            session,
            is_new_user: resolution.is_new_user,
            warning,
        })
    }
}
