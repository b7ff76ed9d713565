//! API route configuration.

use crate::api::handlers::{create_short_url_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl/new`          - Create or look up a mapping
/// - `GET  /shorturl/{short_url}`  - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl/new", post(create_short_url_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
}
