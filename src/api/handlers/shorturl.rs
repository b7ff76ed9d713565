//! Handler for the create-or-find endpoint.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::api::dto::shorturl::{ShortUrlResponse, UrlSubmission};
use crate::application::services::mapping_service::INVALID_URL;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the mapping for a URL, creating it on first submission.
///
/// # Endpoint
///
/// `POST /api/shorturl/new`
///
/// # Request Body
///
/// JSON `{"url": "https://example.com"}` or form-encoded `url=https://example.com`.
///
/// # Response
///
/// ```json
/// { "original_url": "https://example.com", "short_url": 1 }
/// ```
///
/// # Errors
///
/// `{"error": "invalid URL"}` when the host does not resolve or `url` is missing.
/// The status is 200 unless strict status codes are enabled (then 400).
/// Storage failures return 500 with `{"error": "Internal server error"}`.
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    UrlSubmission(payload): UrlSubmission,
) -> Response {
    let result = match payload.url {
        Some(url) => state.mapping_service.create_or_find(&url).await,
        None => Err(AppError::bad_request(INVALID_URL)),
    };

    match result {
        Ok(mapping) => Json(ShortUrlResponse::from(mapping)).into_response(),
        Err(e) => e.into_payload_response(state.strict_status_codes),
    }
}
