//! Identity resolution for the (name, phone) login pair.
//!
//! The phone number is the lookup key and the name must match the stored
//! name exactly. This is a placeholder credential scheme, not authentication.

use thiserror::Error;

use super::{Role, User};
use crate::domain::foundation::{require_text, ErrorCode, ValidationError};

/// Errors raised while resolving a login pair.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdentityError {
    /// A user with this phone exists under a different name.
    #[error("Name does not match the account registered for this phone number")]
    Mismatch,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl IdentityError {
    pub fn code(&self) -> ErrorCode {
        match self {
            IdentityError::Mismatch => ErrorCode::IdentityMismatch,
            IdentityError::Validation(err) => err.code(),
        }
    }
}

/// Decides the role assigned to accounts created through login.
///
/// Accounts whose name equals the configured administrator name
/// (case-insensitively) are created as administrators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePolicy {
    administrator_name: String,
}

impl RolePolicy {
    pub fn new(administrator_name: impl Into<String>) -> Self {
        Self {
            administrator_name: administrator_name.into(),
        }
    }

    /// Classifies a display name.
    pub fn classify(&self, name: &str) -> Role {
        if name.to_lowercase() == self.administrator_name.to_lowercase() {
            Role::Administrator
        } else {
            Role::Standard
        }
    }

    /// Effective role of a user: the stored role, or the classification of
    /// the name for records that predate stored roles.
    pub fn role_of(&self, user: &User) -> Role {
        user.role().unwrap_or_else(|| self.classify(user.name()))
    }
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self::new("admin")
    }
}

/// Outcome of a successful identity resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityResolution {
    pub user: User,
    /// True when `user` was created by this resolution and is not yet stored.
    pub is_new_user: bool,
}

/// Resolves a (name, phone) pair against the known users.
///
/// - Unknown phone: a new user is created (not inserted) and flagged new.
/// - Known phone, identical name: the stored user is returned.
/// - Known phone, different name: `IdentityError::Mismatch`.
pub fn resolve_identity(
    name: &str,
    phone: &str,
    existing_users: &[User],
    policy: &RolePolicy,
) -> Result<IdentityResolution, IdentityError> {
    require_text("name", name)?;
    require_text("phone", phone)?;

    match existing_users.iter().find(|u| u.phone() == phone) {
        Some(existing) if existing.name() == name => Ok(IdentityResolution {
            user: existing.clone(),
            is_new_user: false,
        }),
        Some(_) => Err(IdentityError::Mismatch),
        None => {
            let user = User::new(name, phone, policy.classify(name))?;
            Ok(IdentityResolution {
                user,
                is_new_user: true,
            })
        }
    }
}
