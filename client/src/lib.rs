//! # storefront-client
//!
//! Leptos + WASM frontend for the GadgetHeaven storefront item detail view.
//!
//! This crate contains the item detail page, its presentational components,
//! the view state machine, the injected cart/wishlist list store, and the
//! catalog resolver. The `storefront` server crate renders it with SSR and
//! serves the catalog endpoint it reads from.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
