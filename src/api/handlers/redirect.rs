//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// Answers `302 Found` with the stored URL in `Location`.
///
/// # Errors
///
/// `{"error": "Short url does not exist"}` for unknown or non-numeric ids,
/// with status 200 (404 under strict status codes).
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.mapping_service.resolve(&short_url).await {
        Ok(mapping) => {
            debug!("Redirecting {} to {}", short_url, mapping.original_url);
            (
                StatusCode::FOUND,
                [(header::LOCATION, mapping.original_url)],
            )
                .into_response()
        }
        Err(e) => e.into_payload_response(state.strict_status_codes),
    }
}
