//! In-memory application state.
//!
//! The three collections live here and are handed to handlers by mutable
//! reference. The store holds a serialized mirror that trails this state by
//! at most one write.

use crate::domain::foundation::UserId;
use crate::domain::property::PropertyCatalogue;
use crate::domain::token::TokenLedger;
use crate::domain::user::{Session, User};
use crate::ports::{load_records, CollectionKey, CollectionStore};

/// Authoritative in-memory state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub(crate) users: Vec<User>,
    pub(crate) properties: PropertyCatalogue,
    pub(crate) tokens: TokenLedger,
    pub(crate) session: Option<Session>,
}

impl AppState {
    pub fn new(users: Vec<User>, properties: PropertyCatalogue, tokens: TokenLedger) -> Self {
        Self {
            users,
            properties,
            tokens,
            session: None,
        }
    }

    /// Loads all three collections. Unreadable collections start empty and
    /// undecodable records are skipped.
    pub async fn hydrate(store: &dyn CollectionStore) -> Self {
        let users: Vec<User> = load_records(store, CollectionKey::Users).await;
        let properties = PropertyCatalogue::new(load_records(store, CollectionKey::Properties).await);
        let tokens = TokenLedger::new(load_records(store, CollectionKey::Tokens).await);

        tracing::info!(
            users = users.len(),
            properties = properties.len(),
            tokens = tokens.len(),
            "State hydrated"
        );

        Self::new(users, properties, tokens)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn properties(&self) -> &PropertyCatalogue {
        &self.properties
    }

    pub fn tokens(&self) -> &TokenLedger {
        &self.tokens
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) fn user_exists(&self, user_id: &UserId) -> bool {
        self.users.iter().any(|u| u.id() == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCollectionStore;
    use crate::domain::property::{NewProperty, Property};
    use crate::domain::user::Role;
    use crate::ports::save_collection;

    #[tokio::test]
    async fn hydrate_empty_store_gives_empty_state() {
        let store = InMemoryCollectionStore::new();
        let state = AppState::hydrate(&store).await;
        assert_eq!(state, AppState::default());
    }

    #[tokio::test]
    async fn hydrate_reads_saved_collections() {
        let store = InMemoryCollectionStore::new();
        let user = User::new("Ana", "555-0100", Role::Standard).unwrap();
        let property = Property::new(NewProperty {
            title: "Loft".to_string(),
            estimated_value: 1.0,
            ..Default::default()
        })
        .unwrap();
        save_collection(&store, CollectionKey::Users, &vec![user.clone()])
            .await
            .unwrap();
        save_collection(&store, CollectionKey::Properties, &vec![property.clone()])
            .await
            .unwrap();

        let state = AppState::hydrate(&store).await;

        assert_eq!(state.users(), &[user]);
        assert_eq!(state.properties().as_slice(), &[property]);
        assert!(state.tokens().is_empty());
        assert!(state.session().is_none());
    }

    #[tokio::test]
    async fn corrupt_collection_does_not_affect_others() {
        let store = InMemoryCollectionStore::new();
        let user = User::new("Ana", "555-0100", Role::Standard).unwrap();
        save_collection(&store, CollectionKey::Users, &vec![user.clone()])
            .await
            .unwrap();
        store.put_raw(CollectionKey::Properties, "][").await;

        let state = AppState::hydrate(&store).await;

        assert_eq!(state.users().len(), 1);
        assert!(state.properties().is_empty());
    }

    #[tokio::test]
    async fn undecodable_property_keeps_its_neighbours() {
        let store = InMemoryCollectionStore::new();
        let make = |title: &str| {
            Property::new(NewProperty {
                title: title.to_string(),
                estimated_value: 1.0,
                ..Default::default()
            })
            .unwrap()
        };
        let (loft, barn) = (make("Loft"), make("Barn"));
        let mut broken = serde_json::to_value(make("Mill")).unwrap();
        broken["createdAt"] = serde_json::json!(1_704_067_200_000_i64);
        let document = serde_json::json!([
            serde_json::to_value(&loft).unwrap(),
            broken,
            serde_json::to_value(&barn).unwrap(),
        ]);
        store.put_raw(CollectionKey::Properties, document.to_string()).await;

        let state = AppState::hydrate(&store).await;

        assert_eq!(state.properties().as_slice(), &[loft, barn]);
        assert!(store.backup_document(CollectionKey::Properties).await.is_some());
    }
}
