//! Valuation query handlers.

mod request_valuation;

pub use request_valuation::{RequestValuationHandler, RequestValuationQuery};
