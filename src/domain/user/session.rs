//! Logged-in session.

use super::{Role, RolePolicy, User};
use crate::domain::foundation::Timestamp;

/// The active login. Held in memory only; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
    role: Role,
    started_at: Timestamp,
}

impl Session {
    /// Opens a session for a resolved user, fixing its role for the session.
    pub fn open(user: User, policy: &RolePolicy) -> Self {
        let role = policy.role_of(&user);
        Self {
            user,
            role,
            started_at: Timestamp::now(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_administrator(&self) -> bool {
        self.role.is_administrator()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Replaces the session's copy of its user after the stored record
    /// changed. A stored role takes over the session role.
    pub(crate) fn refresh_user(&mut self, user: User) {
        debug_assert_eq!(user.id(), self.user.id());
        if let Some(role) = user.role() {
            self.role = role;
        }
        self.user = user;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn session_uses_stored_role() {
        let user = User::new("Ana", "555-0100", Role::Administrator).unwrap();
        let session = Session::open(user, &RolePolicy::default());
        assert!(session.is_administrator());
    }

    #[test]
    fn standard_session_is_not_administrator() {
        let user = User::new("Ana", "555-0100", Role::Standard).unwrap();
        let session = Session::open(user.clone(), &RolePolicy::default());
        assert!(!session.is_administrator());
        assert_eq!(session.user(), &user);
    }

    #[test]
    fn refresh_adopts_stored_administrator_role() {
        let mut user = User::new("Marta", "1", Role::Standard).unwrap();
        let mut session = Session::open(user.clone(), &RolePolicy::default());
        let started = *session.started_at();

        user.promote_to_administrator();
        session.refresh_user(user.clone());

        assert!(session.is_administrator());
        assert_eq!(session.user(), &user);
        assert_eq!(session.started_at(), &started);
    }

    #[test]
    fn refresh_keeps_policy_role_for_legacy_user() {
        let legacy = User::reconstitute(
            UserId::new(),
            "admin".to_string(),
            "1".to_string(),
            None,
        );
        let mut session = Session::open(legacy.clone(), &RolePolicy::default());

        session.refresh_user(legacy);

        assert!(session.is_administrator());
    }
}
