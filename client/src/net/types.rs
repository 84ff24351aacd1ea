//! Wire types for the catalog endpoint.
//!
//! DESIGN
//! ======
//! Field names on the wire follow the catalog's `product_*` naming; Rust-side
//! names drop the prefix. Unknown catalog fields (category, availability, ...)
//! are ignored so richer catalogs still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One catalog entry, read-only to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique catalog key.
    #[serde(rename = "product_id")]
    pub id: String,
    #[serde(rename = "product_title")]
    pub title: String,
    pub description: String,
    /// Image URI.
    #[serde(rename = "product_image")]
    pub image: String,
    pub price: f64,
    /// Attribute name to attribute value. Kept sorted by key so renders are stable.
    pub specification: BTreeMap<String, serde_json::Value>,
    /// Average rating in `[0, 5]`.
    pub rating: f64,
}
