//! Search Adapters
//!
//! - **SubstringSearch** - In-process, case-insensitive substring filter

mod substring_search;

pub use substring_search::SubstringSearch;
