//! Persisted cart and wishlist list store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages receive a `SharedListStore` from Leptos context instead of touching
//! `localStorage` directly, so tests can swap in `MemoryListStore`.
//!
//! TRADE-OFFS
//! ==========
//! Browser persistence is best-effort: unreadable or malformed entries read
//! as empty lists and failed writes are logged and dropped. Callers treat
//! every store call as non-failing.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key for the cart list.
pub const CART_STORAGE_KEY: &str = "cart-list";
/// `localStorage` key for the wishlist.
pub const WISHLIST_STORAGE_KEY: &str = "wish-list";

/// Snapshot of the persisted wishlist.
///
/// Ordered by first insertion and always free of duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishList {
    ids: Vec<String>,
}

impl WishList {
    /// Build a wishlist from raw ids, dropping repeats after their first occurrence.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut list = Self::default();
        for id in ids {
            list.insert(id);
        }
        list
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.ids.iter().any(|id| id == item_id)
    }

    /// Insert `item_id`, returning `false` if it was already present.
    pub fn insert(&mut self, item_id: String) -> bool {
        if self.contains(&item_id) {
            return false;
        }
        self.ids.push(item_id);
        true
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Client-local persisted lists the detail view writes to.
pub trait ListStore {
    /// Append `item_id` to the cart. Repeated adds are kept as separate entries.
    fn add_cart_item(&self, item_id: &str);

    /// Record `item_id` in the wishlist. Adding a present id leaves the list unchanged.
    fn add_wishlist_item(&self, item_id: &str);

    /// Current wishlist contents.
    fn list_wishlist(&self) -> WishList;
}

/// List store handle shared through Leptos context.
pub type SharedListStore = Arc<dyn ListStore + Send + Sync>;

/// Process-local test double.
#[derive(Debug, Default)]
pub struct MemoryListStore {
    lists: Mutex<MemoryLists>,
}

#[derive(Debug, Default)]
struct MemoryLists {
    cart: Vec<String>,
    wishlist: WishList,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing wishlist.
    pub fn with_wishlist<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::default();
        for id in ids {
            store.add_wishlist_item(&id.into());
        }
        store
    }

    pub fn cart_items(&self) -> Vec<String> {
        self.lists.lock().unwrap_or_else(PoisonError::into_inner).cart.clone()
    }
}

impl ListStore for MemoryListStore {
    fn add_cart_item(&self, item_id: &str) {
        let mut lists = self.lists.lock().unwrap_or_else(PoisonError::into_inner);
        lists.cart.push(item_id.to_owned());
    }

    fn add_wishlist_item(&self, item_id: &str) {
        let mut lists = self.lists.lock().unwrap_or_else(PoisonError::into_inner);
        lists.wishlist.insert(item_id.to_owned());
    }

    fn list_wishlist(&self) -> WishList {
        self.lists.lock().unwrap_or_else(PoisonError::into_inner).wishlist.clone()
    }
}

/// Store backed by browser `localStorage`; a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserListStore;

impl ListStore for BrowserListStore {
    fn add_cart_item(&self, item_id: &str) {
        let mut cart = load_ids(CART_STORAGE_KEY);
        cart.push(item_id.to_owned());
        save_ids(CART_STORAGE_KEY, &cart);
        log::debug!("cart: added {item_id} ({} entries)", cart.len());
    }

    fn add_wishlist_item(&self, item_id: &str) {
        let mut wishlist = WishList::from_ids(load_ids(WISHLIST_STORAGE_KEY));
        if !wishlist.insert(item_id.to_owned()) {
            log::debug!("wishlist: {item_id} already present");
            return;
        }
        save_ids(WISHLIST_STORAGE_KEY, wishlist.ids());
        log::debug!("wishlist: added {item_id} ({} entries)", wishlist.len());
    }

    fn list_wishlist(&self) -> WishList {
        WishList::from_ids(load_ids(WISHLIST_STORAGE_KEY))
    }
}

/// Decode a stored id list. Anything but a JSON array of strings reads as empty.
pub fn decode_ids(raw: &str) -> Vec<String> {
    match serde_json::from_str(raw) {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!("discarding malformed stored list: {e}");
            Vec::new()
        }
    }
}

fn load_ids(key: &str) -> Vec<String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return Vec::new();
        };
        storage
            .get_item(key)
            .ok()
            .flatten()
            .map(|raw| decode_ids(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        Vec::new()
    }
}

fn save_ids(key: &str, ids: &[String]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("{key}: localStorage unavailable, dropping write");
            return;
        };
        let Ok(raw) = serde_json::to_string(ids) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("{key}: localStorage write rejected");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, ids);
    }
}
