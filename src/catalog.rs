//! Catalog snapshot loaded at startup and served read-only.
//!
//! DESIGN
//! ======
//! The catalog file is parsed once so a malformed catalog fails the process
//! at boot instead of on every client request. Duplicate ids are tolerated
//! but logged; clients resolve to the first record with a given id.
//!
//! Parsing only validates. The file text is kept and served byte-for-byte, so
//! fields the client does not model (`category`, `availability`, ...) and
//! number formatting reach clients unchanged.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use storefront_client::net::types::Item;

/// Errors raised while loading the catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Validated catalog file.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// File contents as read from disk.
    pub raw: String,
    pub items: Vec<Item>,
}

/// Read and validate the catalog at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of items.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read { path: path.to_owned(), source })?;
    let items = parse_catalog_file(path, &raw)?;

    let duplicates = duplicate_ids(&items);
    if !duplicates.is_empty() {
        tracing::warn!(path = %path.display(), ?duplicates, "catalog has duplicate product ids; first record wins");
    }
    tracing::info!(path = %path.display(), items = items.len(), bytes = raw.len(), "catalog loaded");
    Ok(LoadedCatalog { raw, items })
}

fn parse_catalog_file(path: &Path, raw: &str) -> Result<Vec<Item>, CatalogLoadError> {
    serde_json::from_str(raw).map_err(|source| CatalogLoadError::Parse { path: path.to_owned(), source })
}

/// Ids that appear more than once, in order of their second occurrence.
pub fn duplicate_ids(items: &[Item]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for item in items {
        if !seen.insert(item.id.as_str()) && reported.insert(item.id.as_str()) {
            duplicates.push(item.id.clone());
        }
    }
    duplicates
}
