//! RequestValuationHandler - Query handler for valuing a property.

use std::sync::Arc;

use crate::application::AppState;
use crate::domain::foundation::PropertyId;
use crate::domain::property::PropertyError;
use crate::ports::{ValuationResult, ValuationService};

/// Query to value one property.
#[derive(Debug, Clone)]
pub struct RequestValuationQuery {
    pub property_id: PropertyId,
}

/// Handler for valuation requests. Read-only.
pub struct RequestValuationHandler {
    valuation: Arc<dyn ValuationService>,
}

impl RequestValuationHandler {
    pub fn new(valuation: Arc<dyn ValuationService>) -> Self {
        Self { valuation }
    }

    pub fn handle(
        &self,
        state: &AppState,
        query: RequestValuationQuery,
    ) -> Result<ValuationResult, PropertyError> {
        let property = state
            .properties
            .get(&query.property_id)
            .ok_or(PropertyError::NotFound(query.property_id))?;
        Ok(self.valuation.valuate(property))
    }
}
