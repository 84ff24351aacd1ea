//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::item_details::{ITEM_ID_PARAM, ItemDetailsPage};
use crate::state::item_view::APP_NAME;
use crate::state::lists::{BrowserListStore, SharedListStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the persisted list store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: SharedListStore = Arc::new(BrowserListStore);
    provide_context(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text=APP_NAME/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("product"), ParamSegment(ITEM_ID_PARAM)) view=ItemDetailsPage/>
            </Routes>
        </Router>
    }
}
