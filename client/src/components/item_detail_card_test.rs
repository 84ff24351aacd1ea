use std::collections::BTreeMap;

use leptos::reactive::owner::Owner;
use leptos::tachys::view::RenderHtml;

use super::*;

fn lamp() -> Item {
    Item {
        id: "p1".to_owned(),
        title: "Lamp".to_owned(),
        description: "A desk lamp".to_owned(),
        image: "https://img.example/lamp.png".to_owned(),
        price: 20.0,
        specification: BTreeMap::from([("color".to_owned(), serde_json::json!("red"))]),
        rating: 3.6,
    }
}

fn render_card(item: Item, wishlist_disabled: bool) -> String {
    Owner::new().with(|| {
        view! {
            <ItemDetailCard
                item=item
                wishlist_disabled=Signal::derive(move || wishlist_disabled)
                on_add_to_cart=Callback::new(|_: String| {})
                on_add_to_wishlist=Callback::new(|_: String| {})
            />
        }
        .to_html()
    })
}

#[test]
fn lamp_card_renders_copy_price_and_image() {
    let html = render_card(lamp(), false);
    assert!(html.contains("Lamp"));
    assert!(html.contains("A desk lamp"));
    assert!(html.contains("Price: $20"));
    assert!(html.contains("https://img.example/lamp.png"));
}

#[test]
fn lamp_card_fills_four_rating_stars() {
    let html = render_card(lamp(), false);
    assert_eq!(html.matches("rating-stars__star--filled").count(), 4, "{html}");
    assert!(html.contains("3.6"));
}

#[test]
fn lamp_card_renders_one_specification_line() {
    let html = render_card(lamp(), false);
    assert_eq!(html.matches("class=\"spec-list__item\"").count(), 1, "{html}");
    assert!(html.contains("color:"));
    assert!(html.contains("red"));
}

#[test]
fn card_passes_disabled_state_to_wishlist_button() {
    assert!(render_card(lamp(), true).contains(" disabled"));
    assert!(!render_card(lamp(), false).contains(" disabled"));
}

#[test]
fn card_without_specification_renders_no_lines() {
    let mut item = lamp();
    item.specification.clear();
    item.rating = 0.0;
    let html = render_card(item, false);
    assert_eq!(html.matches("class=\"spec-list__item\"").count(), 0);
    assert_eq!(html.matches("rating-stars__star--filled").count(), 0);
}
