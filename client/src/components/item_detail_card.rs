//! Detail card for a resolved catalog item.
//!
//! DESIGN
//! ======
//! Purely presentational: the item is rendered once per resolution and only
//! the wishlist control stays reactive.

#[cfg(test)]
#[path = "item_detail_card_test.rs"]
mod item_detail_card_test;

use leptos::prelude::*;

use crate::components::item_actions::ItemActions;
use crate::components::rating_stars::RatingStars;
use crate::components::specification_list::SpecificationList;
use crate::net::types::Item;
use crate::util::format::format_price;

/// Image, copy, price, specifications, rating, and actions for `item`.
#[component]
pub fn ItemDetailCard(
    item: Item,
    #[prop(into)] wishlist_disabled: Signal<bool>,
    on_add_to_cart: Callback<String>,
    on_add_to_wishlist: Callback<String>,
) -> impl IntoView {
    let Item { id, title, description, image, price, specification, rating } = item;
    let alt = title.clone();

    view! {
        <div class="item-card">
            <div class="item-card__media">
                <img class="item-card__image" src=image alt=alt/>
            </div>
            <div class="item-card__body">
                <h1 class="item-card__title">{title}</h1>
                <p class="item-card__description">{description}</p>
                <p class="item-card__price">{format_price(price)}</p>
                <SpecificationList specification=specification/>
                <RatingStars rating=rating/>
                <ItemActions
                    item_id=id
                    wishlist_disabled=wishlist_disabled
                    on_add_to_cart=on_add_to_cart
                    on_add_to_wishlist=on_add_to_wishlist
                />
            </div>
        </div>
    }
}
