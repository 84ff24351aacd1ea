//! Item details page — one catalog item plus cart/wishlist actions.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator between the URL item id,
//! the catalog resolver, and the injected list store. It owns a per-instance
//! `ItemViewState` and forwards user actions to the store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route changes between items do not remount this component, so resolution
//! is keyed on the id value: `ItemViewState::begin` only issues a ticket
//! when the id actually changes, and results carrying an older ticket are
//! dropped on arrival.

#[cfg(test)]
#[path = "item_details_test.rs"]
mod item_details_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::item_detail_card::ItemDetailCard;
#[cfg(feature = "hydrate")]
use crate::net::catalog::{HttpCatalog, resolve};
use crate::state::item_view::{ItemPhase, ItemViewState, handle_add_to_cart, handle_add_to_wishlist};
use crate::state::lists::SharedListStore;

/// Route parameter carrying the item id.
pub const ITEM_ID_PARAM: &str = "product_id";

const BANNER_HEADING: &str = "Product Details";
const BANNER_BLURB: &str = "Explore the latest gadgets that will take your experience to the next level. \
     From smart devices to the coolest accessories, we have it all!";

/// Body copy for the not-found fallback.
pub fn not_found_message(item_id: Option<&str>) -> String {
    match item_id {
        Some(id) if !id.is_empty() => format!("No product matches \"{id}\"."),
        _ => "No product was requested.".to_owned(),
    }
}

/// Item details page. Reads the item id from the route and resolves it
/// against the catalog whenever the id changes.
#[component]
pub fn ItemDetailsPage() -> impl IntoView {
    let store = expect_context::<SharedListStore>();
    let params = use_params_map();
    let view_state = RwSignal::new(ItemViewState::default());

    let item_id = move || params.read().get(ITEM_ID_PARAM);

    // Resolve once per distinct route id.
    let resolve_store = store.clone();
    Effect::new(move || {
        let Some(next_id) = item_id() else {
            return;
        };
        if view_state.with_untracked(|v| v.item_id.as_deref() == Some(next_id.as_str())) {
            return;
        }
        let Some(seq) = view_state.try_update(|v| v.begin(&next_id)).flatten() else {
            return;
        };
        log::debug!("item {next_id}: resolving (ticket {seq})");
        spawn_resolution(view_state, resolve_store.clone(), next_id, seq);
    });

    let cart_store = store.clone();
    let on_add_to_cart = Callback::new(move |id: String| {
        handle_add_to_cart(&*cart_store, &id);
    });
    let on_add_to_wishlist = Callback::new(move |id: String| {
        view_state.update(|v| handle_add_to_wishlist(v, &*store, &id));
    });

    let phase = Memo::new(move |_| view_state.with(|v| v.phase.clone()));
    let wishlist_disabled = Signal::derive(move || view_state.with(ItemViewState::wishlist_disabled));

    view! {
        <Title text=move || view_state.with(ItemViewState::document_title)/>
        <div class="item-details">
            <header class="item-details__banner">
                <h1 class="item-details__heading">{BANNER_HEADING}</h1>
                <p class="item-details__blurb">{BANNER_BLURB}</p>
            </header>
            <section class="item-details__content">
                {move || match phase.get() {
                    ItemPhase::Loading => {
                        view! { <p class="item-details__loading">"Loading..."</p> }.into_any()
                    }
                    ItemPhase::NotFound(_) => {
                        let message = not_found_message(view_state.with_untracked(|v| v.item_id.clone()).as_deref());
                        view! {
                            <div class="item-details__not-found">
                                <h2>"Product Not Found"</h2>
                                <p>{message}</p>
                                <a class="btn" href="/">"Back to shop"</a>
                            </div>
                        }
                            .into_any()
                    }
                    ItemPhase::Resolved(item) => {
                        view! {
                            <ItemDetailCard
                                item=item
                                wishlist_disabled=wishlist_disabled
                                on_add_to_cart=on_add_to_cart
                                on_add_to_wishlist=on_add_to_wishlist
                            />
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

/// Fetch the catalog for `item_id` and apply the outcome under ticket `seq`.
fn spawn_resolution(view_state: RwSignal<ItemViewState>, store: SharedListStore, item_id: String, seq: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = resolve(&HttpCatalog::default(), &item_id).await;
        if let Err(e) = &outcome {
            log::warn!("item {item_id}: {e}");
        }
        let wishlist = store.list_wishlist();
        let applied = view_state
            .try_update(|v| v.finish(seq, outcome, &wishlist))
            .unwrap_or(false);
        if !applied {
            log::debug!("item {item_id}: dropping superseded resolution (ticket {seq})");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (view_state, store, item_id, seq);
    }
}
