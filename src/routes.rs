//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                          - Landing page (`views/index.html`)
//! - `GET  /public/*`                  - Static assets
//! - `GET  /health`                    - Store health check
//! - `POST /api/shorturl/new`          - Create or find a mapping
//! - `GET  /api/shorturl/{short_url}`  - Redirect to the original URL
//!
//! # Middleware
//!
//! - **CORS** - Any origin may call the API
//! - **Access log** - `METHOD path - ip` per request
//! - **Tracing** - Structured request/response spans
//! - **Path normalization** - Trailing slash handling

use std::path::Path;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{access_log, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Locations of the landing page and static assets.
#[derive(Debug, Clone)]
pub struct AssetDirs<'a> {
    pub static_dir: &'a Path,
    pub views_dir: &'a Path,
}

/// Builds the router with all routes and middleware, without path normalization.
pub fn router(state: AppState, assets: &AssetDirs<'_>) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(assets.views_dir.join("index.html")))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/public", ServeDir::new(assets.static_dir))
        .with_state(state)
        .layer(middleware::from_fn(access_log::layer))
        .layer(CorsLayer::permissive())
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState, assets: &AssetDirs<'_>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, assets))
}
