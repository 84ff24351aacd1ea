//! Client state for the item detail view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `item_view` holds the per-page resolution state machine; `lists` is the
//! persisted cart/wishlist store injected through context.

pub mod item_view;
pub mod lists;
