//! Catalog retrieval and item resolution.
//!
//! Client-side (hydrate): the catalog is fetched over HTTP via `gloo-net`.
//! Server-side (SSR): `HttpCatalog` reports a retrieval failure since item
//! resolution only runs in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into `ResolveError`. Callers render a fallback
//! from it; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::future::Future;

use super::types::Item;

/// Default catalog endpoint, served by the storefront host.
pub const CATALOG_ENDPOINT: &str = "/items.json";

/// Why an item could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The catalog was unreachable or its body was malformed.
    #[error("catalog retrieval failed: {0}")]
    RetrievalFailed(String),

    /// The catalog loaded but holds no record with the requested id.
    #[error("item not found: {0}")]
    NotFound(String),
}

/// A read-only source of the full catalog snapshot.
pub trait CatalogSource {
    /// Retrieve every catalog record, in catalog order.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Item>, ResolveError>>;
}

/// Catalog fetched from a JSON endpoint with a single unparameterized GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpCatalog {
    pub endpoint: String,
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self { endpoint: CATALOG_ENDPOINT.to_owned() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn catalog_request_failed_message(status: u16) -> String {
    format!("catalog request failed: {status}")
}

impl CatalogSource for HttpCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Item>, ResolveError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| ResolveError::RetrievalFailed(e.to_string()))?;
            if !resp.ok() {
                return Err(ResolveError::RetrievalFailed(catalog_request_failed_message(resp.status())));
            }
            let body = resp
                .text()
                .await
                .map_err(|e| ResolveError::RetrievalFailed(e.to_string()))?;
            parse_catalog(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ResolveError::RetrievalFailed(format!("{} not available on server", self.endpoint)))
        }
    }
}

/// Catalog held in memory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticCatalog {
    pub items: Vec<Item>,
}

impl StaticCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl CatalogSource for StaticCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Item>, ResolveError> {
        Ok(self.items.clone())
    }
}

/// Decode a catalog endpoint body.
///
/// # Errors
///
/// Returns `RetrievalFailed` when the body is not a JSON array of items.
pub fn parse_catalog(raw: &str) -> Result<Vec<Item>, ResolveError> {
    serde_json::from_str(raw).map_err(|e| ResolveError::RetrievalFailed(format!("malformed catalog: {e}")))
}

/// First record whose id equals `item_id`.
pub fn find_item<'a>(catalog: &'a [Item], item_id: &str) -> Option<&'a Item> {
    catalog.iter().find(|item| item.id == item_id)
}

/// Fetch the full catalog from `source` and select `item_id` from it.
///
/// # Errors
///
/// Returns `RetrievalFailed` if the catalog cannot be fetched or decoded, and
/// `NotFound` if no record carries `item_id`.
pub async fn resolve<C: CatalogSource>(source: &C, item_id: &str) -> Result<Item, ResolveError> {
    let catalog = source.fetch_catalog().await?;
    let item = find_item(&catalog, item_id).cloned();
    item.ok_or_else(|| ResolveError::NotFound(item_id.to_owned()))
}
