//! AddComparableHandler - Command handler for recording a comparable sale.

use std::sync::Arc;

use crate::application::persistence::{persist, PersistenceWarning};
use crate::application::AppState;
use crate::domain::foundation::PropertyId;
use crate::domain::property::{Comparable, PropertyError};
use crate::ports::{CollectionKey, CollectionStore};

/// Command to append a comparable value.
#[derive(Debug, Clone)]
pub struct AddComparableCommand {
    pub property_id: PropertyId,
    pub value: f64,
}

/// Result of adding a comparable.
#[derive(Debug, Clone, Default)]
pub struct AddComparableResult {
    /// `None` when no property matched; nothing was changed.
    pub comparable: Option<Comparable>,
    pub warning: Option<PersistenceWarning>,
}

/// Handler for adding comparables.
pub struct AddComparableHandler {
    store: Arc<dyn CollectionStore>,
}

impl AddComparableHandler {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        state: &mut AppState,
        cmd: AddComparableCommand,
    ) -> Result<AddComparableResult, PropertyError> {
        let comparable = match state.properties.add_comparable(&cmd.property_id, cmd.value)? {
            Some(comparable) => comparable,
            None => {
                tracing::debug!(property_id = %cmd.property_id, "Comparable skipped, no such property");
                return Ok(AddComparableResult::default());
            }
        };
        tracing::info!(
            property_id = %cmd.property_id,
            comparable_id = %comparable.id,
            value = comparable.value,
            "Comparable added"
        );

        let warning = persist(self.store.as_ref(), CollectionKey::Properties, &state.properties).await;
        Ok(AddComparableResult {
            comparable: Some(comparable),
            warning,
        })
    }
}
