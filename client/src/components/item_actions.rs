//! Add-to-cart and add-to-wishlist controls.
//!
//! DESIGN
//! ======
//! The wishlist button follows `ItemViewState::wishlist_disabled`, so the
//! action only fires from the UI once per view instance.

#[cfg(test)]
#[path = "item_actions_test.rs"]
mod item_actions_test;

use leptos::prelude::*;

/// CSS class for the wishlist button in its current state.
pub fn wishlist_button_class(disabled: bool) -> &'static str {
    if disabled {
        "btn item-actions__wishlist item-actions__wishlist--disabled"
    } else {
        "btn item-actions__wishlist"
    }
}

/// Tooltip for the wishlist button.
pub fn wishlist_button_title(disabled: bool) -> &'static str {
    if disabled { "Already in wishlist" } else { "Add to wishlist" }
}

/// Action row for a resolved item.
#[component]
pub fn ItemActions(
    item_id: String,
    #[prop(into)] wishlist_disabled: Signal<bool>,
    on_add_to_cart: Callback<String>,
    on_add_to_wishlist: Callback<String>,
) -> impl IntoView {
    let cart_id = item_id.clone();

    view! {
        <div class="item-actions">
            <button
                class="btn item-actions__cart"
                on:click=move |_| on_add_to_cart.run(cart_id.clone())
            >
                "Add to Cart"
            </button>
            <button
                class=move || wishlist_button_class(wishlist_disabled.get())
                disabled=move || wishlist_disabled.get()
                title=move || wishlist_button_title(wishlist_disabled.get())
                aria-label=move || wishlist_button_title(wishlist_disabled.get())
                on:click=move |_| {
                    if !wishlist_disabled.get_untracked() {
                        on_add_to_wishlist.run(item_id.clone());
                    }
                }
            >
                "♡"
            </button>
        </div>
    }
}
