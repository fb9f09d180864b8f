//! Case-insensitive substring search over title, address and metadata.

use crate::domain::property::Property;
use crate::ports::PropertySearch;

/// Matches a property when the lowercased query occurs in its title, its
/// address, or the JSON text of its metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringSearch;

impl SubstringSearch {
    pub fn new() -> Self {
        Self
    }

    fn matches(needle: &str, property: &Property) -> bool {
        if property.title().to_lowercase().contains(needle)
            || property.address().to_lowercase().contains(needle)
        {
            return true;
        }
        serde_json::to_string(property.metadata())
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
    }
}

impl PropertySearch for SubstringSearch {
    fn search(&self, query: &str, properties: &[Property]) -> Vec<Property> {
        if query.trim().is_empty() {
            return properties.to_vec();
        }
        let needle = query.to_lowercase();
        properties
            .iter()
            .filter(|p| Self::matches(&needle, p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::NewProperty;
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    fn property(title: &str, address: &str, metadata: Value) -> Property {
        let metadata: Map<String, Value> = match metadata {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Property::new(NewProperty {
            title: title.to_string(),
            address: address.to_string(),
            estimated_value: 1.0,
            metadata,
            ..Default::default()
        })
        .unwrap()
    }

    fn sample() -> Vec<Property> {
        vec![
            property("Harbour Loft", "12 Quay St, Lisbon", json!({"type": "apartment"})),
            property("Vineyard Estate", "Route 4, Douro", json!({"hectares": 40})),
            property("City Office", "1 Market Sq, Porto", json!({"floors": 3, "zone": "Commercial"})),
        ]
    }

    fn titles(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.title()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let properties = sample();
        assert_eq!(SubstringSearch.search("", &properties), properties);
        assert_eq!(SubstringSearch.search("   ", &properties), properties);
    }

    #[test]
    fn matches_title_case_insensitively() {
        let found = SubstringSearch.search("LOFT", &sample());
        assert_eq!(titles(&found), vec!["Harbour Loft"]);
    }

    #[test]
    fn matches_address() {
        let found = SubstringSearch.search("douro", &sample());
        assert_eq!(titles(&found), vec!["Vineyard Estate"]);
    }

    #[test]
    fn matches_metadata_values_and_keys() {
        let found = SubstringSearch.search("commercial", &sample());
        assert_eq!(titles(&found), vec!["City Office"]);

        let found = SubstringSearch.search("hectares", &sample());
        assert_eq!(titles(&found), vec!["Vineyard Estate"]);
    }

    #[test]
    fn keeps_relative_order_of_matches() {
        let found = SubstringSearch.search("st", &sample());
        assert_eq!(titles(&found), vec!["Harbour Loft", "Vineyard Estate"]);
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_query() {
        let properties = vec![property("Loft by the Sea", "1 Rua Nova", json!({}))];

        assert!(SubstringSearch.search(" loft", &properties).is_empty());
        assert_eq!(SubstringSearch.search("loft", &properties).len(), 1);
        assert_eq!(SubstringSearch.search("the sea", &properties).len(), 1);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(SubstringSearch.search("penthouse", &sample()).is_empty());
    }

    #[test]
    fn does_not_modify_input() {
        let properties = sample();
        let before = properties.clone();
        let _ = SubstringSearch.search("loft", &properties);
        assert_eq!(properties, before);
    }

    proptest! {
        #[test]
        fn results_are_an_ordered_subsequence(query in "[a-z ]{0,4}") {
            let properties = sample();
            let found = SubstringSearch.search(&query, &properties);
            let mut remaining = properties.iter();
            for hit in &found {
                prop_assert!(remaining.any(|p| p == hit));
            }
        }
    }
}
