//! AssignPropertyHandler - Command handler for assigning a property to a user.
//!
//! Assigning an unknown property is a deliberate no-op: nothing changes,
//! nothing is written and no error is raised. The result reports it.

use std::sync::Arc;

use crate::application::persistence::{persist, PersistenceWarning};
use crate::application::AppState;
use crate::domain::foundation::{PropertyId, UserId};
use crate::domain::property::PropertyError;
use crate::ports::{CollectionKey, CollectionStore};

/// Command to assign a property.
#[derive(Debug, Clone)]
pub struct AssignPropertyCommand {
    pub property_id: PropertyId,
    pub user_id: UserId,
}

/// Result of an assignment.
#[derive(Debug, Clone, Default)]
pub struct AssignPropertyResult {
    /// False when no property matched.
    pub applied: bool,
    pub warning: Option<PersistenceWarning>,
}

/// Handler for assigning properties.
pub struct AssignPropertyHandler {
    store: Arc<dyn CollectionStore>,
}

impl AssignPropertyHandler {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        state: &mut AppState,
        cmd: AssignPropertyCommand,
    ) -> Result<AssignPropertyResult, PropertyError> {
        if state.properties.get(&cmd.property_id).is_none() {
            tracing::debug!(property_id = %cmd.property_id, "Assign skipped, no such property");
            return Ok(AssignPropertyResult::default());
        }
        if !state.user_exists(&cmd.user_id) {
            return Err(PropertyError::UnknownUser(cmd.user_id));
        }

        state.properties.assign(&cmd.property_id, cmd.user_id);
        tracing::info!(
            property_id = %cmd.property_id,
            user_id = %cmd.user_id,
            "Property assigned"
        );

        let warning = persist(self.store.as_ref(), CollectionKey::Properties, &state.properties).await;
        Ok(AssignPropertyResult {
            applied: true,
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCollectionStore;
    use crate::domain::property::{NewProperty, Property, PropertyCatalogue};
    use crate::domain::user::{Role, User};

    fn seeded() -> (AppState, User, Property) {
        let user = User::new("Ana", "1", Role::Standard).unwrap();
        let property = Property::new(NewProperty {
            title: "Loft".to_string(),
            estimated_value: 1.0,
            ..Default::default()
        })
        .unwrap();
        let other = Property::new(NewProperty {
            title: "Barn".to_string(),
            estimated_value: 2.0,
            ..Default::default()
        })
        .unwrap();
        let state = AppState::new(
            vec![user.clone()],
            PropertyCatalogue::new(vec![property.clone(), other]),
            Default::default(),
        );
        (state, user, property)
    }

    #[tokio::test]
    async fn assigns_and_persists() {
        let store = InMemoryCollectionStore::new();
        let handler = AssignPropertyHandler::new(Arc::new(store.clone()));
        let (mut state, user, property) = seeded();

        let result = handler
            .handle(
                &mut state,
                AssignPropertyCommand {
                    property_id: *property.id(),
                    user_id: *user.id(),
                },
            )
            .await
            .unwrap();

        assert!(result.applied);
        assert_eq!(
            state.properties().get(property.id()).unwrap().assigned_to(),
            Some(user.id())
        );
        assert_eq!(state.properties().as_slice()[1].assigned_to(), None);
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn unknown_property_is_a_silent_no_op() {
        let store = InMemoryCollectionStore::new();
        let handler = AssignPropertyHandler::new(Arc::new(store.clone()));
        let (mut state, user, _) = seeded();
        let before = state.clone();

        let result = handler
            .handle(
                &mut state,
                AssignPropertyCommand {
                    property_id: PropertyId::new(),
                    user_id: *user.id(),
                },
            )
            .await
            .unwrap();

        assert!(!result.applied);
        assert!(result.warning.is_none());
        assert_eq!(state, before);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let store = InMemoryCollectionStore::new();
        let handler = AssignPropertyHandler::new(Arc::new(store));
        let (mut state, _, property) = seeded();
        let stranger = UserId::new();

        let result = handler
            .handle(
                &mut state,
                AssignPropertyCommand {
                    property_id: *property.id(),
                    user_id: stranger,
                },
            )
            .await;

        assert_eq!(result.unwrap_err(), PropertyError::UnknownUser(stranger));
        assert_eq!(state.properties().get(property.id()).unwrap().assigned_to(), None);
    }
}
