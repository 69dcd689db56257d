//! Bundled listing catalog.

use anyhow::{Context, Result};
use guri_compare::ComparisonEntry;

const LISTINGS_JSON: &str = include_str!("../assets/listings.json");

/// Parse the bundled listings.
///
/// Fields the compare list does not model (agent, coordinates, description)
/// ride along in each entry's `extra` map.
pub fn load_catalog() -> Result<Vec<ComparisonEntry>> {
    serde_json::from_str(LISTINGS_JSON).context("bundled listings.json is not a valid listing array")
}

/// Case-insensitive match on title, city, area and type.
pub fn matches_query(entry: &ComparisonEntry, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    let mut haystack = vec![entry.title.as_str()];
    if let Some(location) = &entry.location {
        haystack.push(&location.city);
        if let Some(area) = &location.area {
            haystack.push(area);
        }
    }
    if let Some(property_type) = &entry.property_type {
        haystack.push(property_type);
    }

    haystack.iter().any(|field| field.to_lowercase().contains(&query))
}
