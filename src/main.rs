mod catalog;
mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let catalog = match catalog::load_catalog(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            std::process::exit(1);
        }
    };

    let item_count = catalog.items.len();
    let app = match routes::app(state::AppState::new(catalog.raw)) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router setup failed");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, items = item_count, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
