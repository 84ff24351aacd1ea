//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the catalog endpoint and health check, then stitches them with
//! Leptos SSR rendering and the compiled WASM assets under a single Axum
//! router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use leptos::config::get_configuration;
use leptos_axum::{LeptosRoutes, generate_route_list};
use storefront_client::net::catalog::CATALOG_ENDPOINT;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Catalog and health routes, independent of Leptos configuration.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route(CATALOG_ENDPOINT, get(catalog))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Full application: API routes + Leptos SSR + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(storefront_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || storefront_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

/// `GET /items.json`: the catalog file body, unmodified.
async fn catalog(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], state.catalog_json.to_string())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
