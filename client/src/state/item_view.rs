//! Item detail view state machine.
//!
//! ARCHITECTURE
//! ============
//! `ItemViewState` moves through `Loading -> Resolved | NotFound` once per
//! distinct item id. `begin` detects id changes and issues a resolution
//! ticket; `finish` applies a result only if its ticket is still current, so
//! a slow response for a superseded id never lands on the new one.
//!
//! TRADE-OFFS
//! ==========
//! The wishlist flag is updated optimistically after a store write and is not
//! re-read. The store contract makes writes non-failing, and the control is
//! disabled once the flag is set.

#[cfg(test)]
#[path = "item_view_test.rs"]
mod item_view_test;

use crate::net::catalog::ResolveError;
use crate::net::types::Item;
use crate::state::lists::{ListStore, WishList};

/// Storefront name used in document titles.
pub const APP_NAME: &str = "GadgetHeaven";
/// Document title shown when an item cannot be resolved.
pub const NOT_FOUND_TITLE: &str = "GadgetHeaven - Product Not Found";

/// Resolution lifecycle for the current item id.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ItemPhase {
    /// Waiting on the catalog.
    #[default]
    Loading,
    /// The catalog holds the requested item.
    Resolved(Item),
    /// Missing from the catalog, or the catalog could not be read.
    NotFound(ResolveError),
}

/// Per-instance state of the item detail view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemViewState {
    /// Item id currently being resolved or displayed.
    pub item_id: Option<String>,
    pub phase: ItemPhase,
    /// Whether the resolved item is known to be in the persisted wishlist.
    pub is_wishlisted: bool,
    /// Ticket of the most recently started resolution.
    pub resolve_seq: u64,
}

impl ItemViewState {
    /// Start resolving `item_id`.
    ///
    /// Returns a ticket when the id differs from the current one (state resets
    /// to `Loading`), or `None` when `item_id` is already current.
    pub fn begin(&mut self, item_id: &str) -> Option<u64> {
        if self.item_id.as_deref() == Some(item_id) {
            return None;
        }
        self.item_id = Some(item_id.to_owned());
        self.phase = ItemPhase::Loading;
        self.is_wishlisted = false;
        self.resolve_seq += 1;
        Some(self.resolve_seq)
    }

    /// Apply a resolution outcome.
    ///
    /// `wishlist` is the persisted wishlist read when the outcome arrived.
    /// Returns `false` and leaves state untouched if `seq` is stale.
    pub fn finish(&mut self, seq: u64, outcome: Result<Item, ResolveError>, wishlist: &WishList) -> bool {
        if seq != self.resolve_seq {
            return false;
        }
        match outcome {
            Ok(item) => {
                self.is_wishlisted = wishlist.contains(&item.id);
                self.phase = ItemPhase::Resolved(item);
            }
            Err(reason) => {
                self.is_wishlisted = false;
                self.phase = ItemPhase::NotFound(reason);
            }
        }
        true
    }

    /// Set the wishlist flag after a wishlist write.
    pub fn mark_wishlisted(&mut self) {
        self.is_wishlisted = true;
    }

    /// Whether the wishlist control should be disabled.
    pub fn wishlist_disabled(&self) -> bool {
        self.is_wishlisted
    }

    /// Document title for the current phase.
    pub fn document_title(&self) -> String {
        match &self.phase {
            ItemPhase::Loading => APP_NAME.to_owned(),
            ItemPhase::Resolved(item) => format!("{APP_NAME} | {}", item.title),
            ItemPhase::NotFound(_) => NOT_FOUND_TITLE.to_owned(),
        }
    }
}

/// Forward an add-to-cart action to the store. View state is unchanged.
pub fn handle_add_to_cart(store: &dyn ListStore, item_id: &str) {
    store.add_cart_item(item_id);
}

/// Forward an add-to-wishlist action to the store and flag the view.
pub fn handle_add_to_wishlist(view: &mut ItemViewState, store: &dyn ListStore, item_id: &str) {
    store.add_wishlist_item(item_id);
    view.mark_wishlisted();
}
