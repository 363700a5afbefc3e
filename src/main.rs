use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod db;
mod error;
mod extract;
mod handlers;
mod models;
mod openapi;

use crate::config::Config;
use crate::db::{Db, JsonFileStore};

/// Shared application state, cheap to clone (the store sits behind an Arc).
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,fast_inventory=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = JsonFileStore::new(&config.db_path);
    if config.init_db {
        store.ensure_initialized().await?;
    }
    info!(path = %store.path().display(), "Using JSON document store");

    let state = AppState {
        db: Db::new(Arc::new(store)),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("FastInventory listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Landing + health ────────────────────────────────────────────────
        .route("/", get(handlers::home_page))
        .route("/health", get(handlers::health))

        // ── Categories ──────────────────────────────────────────────────────
        .route(
            "/categories",
            get(handlers::categories::list_categories)
                .post(handlers::categories::create_category),
        )
        .route(
            "/categories/:id",
            put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/products",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/products/:sku",
            put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )

        // ── API docs ────────────────────────────────────────────────────────
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
