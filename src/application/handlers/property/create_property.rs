//! CreatePropertyHandler - Command handler for listing a new property.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::persistence::{persist, PersistenceWarning};
use crate::application::AppState;
use crate::domain::foundation::UserId;
use crate::domain::property::{NewProperty, Property, PropertyError};
use crate::ports::{CollectionKey, CollectionStore};

/// Command to list a property.
#[derive(Debug, Clone, Default)]
pub struct CreatePropertyCommand {
    pub title: String,
    pub address: String,
    pub estimated_value: f64,
    pub assigned_to: Option<UserId>,
    pub metadata: Map<String, Value>,
}

/// Result of successful property creation.
#[derive(Debug, Clone)]
pub struct CreatePropertyResult {
    pub property: Property,
    pub warning: Option<PersistenceWarning>,
}

/// Handler for creating properties.
pub struct CreatePropertyHandler {
    store: Arc<dyn CollectionStore>,
}

impl CreatePropertyHandler {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        state: &mut AppState,
        cmd: CreatePropertyCommand,
    ) -> Result<CreatePropertyResult, PropertyError> {
        // 1. Assignee must be a known user
        if let Some(user_id) = &cmd.assigned_to {
            if !state.user_exists(user_id) {
                return Err(PropertyError::UnknownUser(*user_id));
            }
        }

        // 2. Build and insert at the head
        let property = Property::new(NewProperty {
            title: cmd.title,
            address: cmd.address,
            estimated_value: cmd.estimated_value,
            assigned_to: cmd.assigned_to,
            metadata: cmd.metadata,
        })?;
        state.properties.insert_newest(property.clone());
        tracing::info!(property_id = %property.id(), title = property.title(), "Property created");

        // 3. Persist
        let warning = persist(self.store.as_ref(), CollectionKey::Properties, &state.properties).await;

        Ok(CreatePropertyResult { property, warning })
    }
}
