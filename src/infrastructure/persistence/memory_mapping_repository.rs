//! In-memory implementation of mapping repository.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// Process-local mapping store.
///
/// Mappings are kept in insertion order and lost on restart. Used when no
/// database is configured and by the HTTP tests.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    inner: Mutex<Vec<Mapping>>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_mappings<T>(&self, f: impl FnOnce(&mut Vec<Mapping>) -> T) -> Result<T, AppError> {
        let mut mappings = self
            .inner
            .lock()
            .map_err(|_| AppError::internal("mapping store mutex poisoned"))?;
        Ok(f(&mut mappings))
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError> {
        self.with_mappings(|mappings| {
            mappings
                .iter()
                .find(|m| m.original_url == original_url)
                .cloned()
        })
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<Mapping>, AppError> {
        self.with_mappings(|mappings| mappings.iter().find(|m| m.short_url == short_url).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.with_mappings(|mappings| mappings.len() as i64)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mapping = Mapping::from(new_mapping);
        self.with_mappings(|mappings| {
            mappings.push(mapping.clone());
            mapping
        })
    }
}
