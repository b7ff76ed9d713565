//! DTOs for the short URL endpoints.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::Mapping;

/// Body of `POST /api/shorturl/new`.
///
/// `url` is `None` when the field is missing, `null`, or not a string. Such
/// bodies are answered like any other unusable URL instead of a
/// deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateShortUrlRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub url: Option<String>,
}

/// Keeps string values and discards anything else.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(url) => Some(url),
        Field::Other(_) => None,
    })
}

/// Successful create-or-find response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<Mapping> for ShortUrlResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_url: mapping.short_url,
        }
    }
}

/// Extracts [`CreateShortUrlRequest`] from either a JSON or an HTML form body.
///
/// The `Content-Type` picks the parser. Any other body type carries no `url`
/// and yields an empty request. Malformed JSON is still rejected with 400.
#[derive(Debug)]
pub struct UrlSubmission(pub CreateShortUrlRequest);

impl<S> FromRequest<S> for UrlSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<CreateShortUrlRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(payload))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(payload) = Form::<CreateShortUrlRequest>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(payload))
        } else {
            Ok(Self(CreateShortUrlRequest::default()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_shape() {
        let body = serde_json::to_value(ShortUrlResponse::from(Mapping::new(
            "https://example.com",
            1,
        )))
        .unwrap();

        assert_eq!(
            body,
            json!({ "original_url": "https://example.com", "short_url": 1 })
        );
    }

    #[test]
    fn test_request_without_url() {
        let request: CreateShortUrlRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.url.is_none());
    }

    #[test]
    fn test_request_with_non_string_url() {
        for body in [
            json!({ "url": 5 }),
            json!({ "url": null }),
            json!({ "url": ["https://example.com"] }),
            json!({ "url": { "href": "https://example.com" } }),
        ] {
            let request: CreateShortUrlRequest = serde_json::from_value(body).unwrap();
            assert!(request.url.is_none());
        }
    }

    #[test]
    fn test_request_with_string_url() {
        let request: CreateShortUrlRequest =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();
        assert_eq!(request.url.as_deref(), Some("https://example.com"));
    }
}
