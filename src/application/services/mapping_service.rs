//! Mapping creation and resolution service.

use std::sync::Arc;

use crate::application::validator::HostnameValidator;
use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use tracing::{error, info};

/// Payload message for URLs whose host does not resolve.
pub const INVALID_URL: &str = "invalid URL";

/// Payload message for ids that were never assigned.
pub const SHORT_URL_NOT_FOUND: &str = "Short url does not exist";

/// Service implementing the two mapping operations.
///
/// Ids are assigned as `count + 1` with no reservation step, so two concurrent
/// creations of different URLs can observe the same count and store the same id.
pub struct MappingService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    validator: Arc<HostnameValidator>,
}

impl<R: MappingRepository + ?Sized> MappingService<R> {
    /// Creates a new mapping service.
    pub fn new(repository: Arc<R>, validator: Arc<HostnameValidator>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Returns the existing mapping for `url`, or validates and stores a new one.
    ///
    /// A URL that was stored before is returned as-is, without re-validation.
    /// A failed insert is logged and the constructed mapping is still returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the host does not resolve.
    /// Returns [`AppError::Internal`] if the lookup or count fails.
    pub async fn create_or_find(&self, url: &str) -> Result<Mapping, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(url).await? {
            return Ok(existing);
        }

        if !self.validator.is_url_valid(url).await {
            return Err(AppError::bad_request(INVALID_URL));
        }

        let count = self.repository.count().await?;
        let new_mapping = NewMapping::next(url, count);
        let mapping = Mapping::from(new_mapping.clone());

        match self.repository.insert(new_mapping).await {
            Ok(stored) => info!(
                "Created mapping {} -> {}",
                stored.short_url, stored.original_url
            ),
            Err(e) => error!("Failed to store mapping {}: {}", mapping.short_url, e),
        }

        Ok(mapping)
    }

    /// Looks up the mapping for a short id taken verbatim from the request path.
    ///
    /// Numeric spellings of an integer (`1`, `1.0`, `1e0`) all name the same id.
    /// Anything else cannot match a stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_url: &str) -> Result<Mapping, AppError> {
        let Some(id) = parse_short_url(short_url) else {
            return Err(AppError::not_found(SHORT_URL_NOT_FOUND));
        };

        self.repository
            .find_by_short_url(id)
            .await?
            .ok_or_else(|| AppError::not_found(SHORT_URL_NOT_FOUND))
    }

    /// Checks that the store answers queries.
    pub async fn ping(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

/// Reads a path segment as an integral id.
fn parse_short_url(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }

    let value = raw.parse::<f64>().ok()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
