//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::domain::repositories::MappingRepository;

/// Service handle shared by all requests; the store behind it is chosen at startup.
pub type SharedMappingService = Arc<MappingService<dyn MappingRepository>>;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: SharedMappingService,
    /// Report client errors with 400/404 instead of 200.
    pub strict_status_codes: bool,
}

impl AppState {
    pub fn new(mapping_service: SharedMappingService, strict_status_codes: bool) -> Self {
        Self {
            mapping_service,
            strict_status_codes,
        }
    }
}
