//! Save-after-mutation helper.

use serde::Serialize;
use std::fmt;

use crate::ports::{save_collection, CollectionKey, CollectionStore, StoreError};

/// A mutation was applied in memory but its collection could not be saved.
///
/// Non-fatal: the next successful save of the same collection catches up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    pub collection: CollectionKey,
    pub error: StoreError,
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Changes to {} were applied but not saved: {}",
            self.collection, self.error
        )
    }
}

/// Writes one collection snapshot, turning a failure into a warning.
pub(crate) async fn persist<T>(
    store: &dyn CollectionStore,
    key: CollectionKey,
    value: &T,
) -> Option<PersistenceWarning>
where
    T: Serialize + ?Sized,
{
    match save_collection(store, key, value).await {
        Ok(()) => None,
        Err(error) => {
            tracing::warn!(collection = %key, error = %error, "Save failed, keeping in-memory state");
            Some(PersistenceWarning {
                collection: key,
                error,
            })
        }
    }
}
