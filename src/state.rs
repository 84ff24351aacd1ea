//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared data is the immutable catalog body, so a cheap `Arc` clone per
//! request is all the synchronization needed.

use std::sync::Arc;

const EMPTY_CATALOG: &str = "[]";

#[derive(Clone, Debug)]
pub struct AppState {
    /// Catalog file text, served as-is.
    pub catalog_json: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog_json: impl Into<Arc<str>>) -> Self {
        Self { catalog_json: catalog_json.into() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EMPTY_CATALOG)
    }
}
