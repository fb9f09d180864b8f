//! ListPropertiesHandler - Query handler for browsing and searching.

use std::sync::Arc;

use crate::application::AppState;
use crate::domain::property::Property;
use crate::ports::PropertySearch;

/// Query for the property list, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct ListPropertiesQuery {
    pub filter: Option<String>,
}

/// Handler for listing properties.
pub struct ListPropertiesHandler {
    search: Arc<dyn PropertySearch>,
}

impl ListPropertiesHandler {
    pub fn new(search: Arc<dyn PropertySearch>) -> Self {
        Self { search }
    }

    /// Properties in catalogue order (newest first), filtered by the search
    /// service when a query is given.
    pub fn handle(&self, state: &AppState, query: ListPropertiesQuery) -> Vec<Property> {
        let properties = state.properties.as_slice();
        match query.filter.as_deref() {
            Some(filter) => self.search.search(filter, properties),
            None => properties.to_vec(),
        }
    }
}
