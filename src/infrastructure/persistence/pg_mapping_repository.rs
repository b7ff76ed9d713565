//! PostgreSQL implementation of mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// Uses bound parameters for every value. When several rows share a key, the
/// oldest one wins.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT original_url, short_url
            FROM mappings
            WHERE original_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(original_url, short_url)| Mapping::new(original_url, short_url)))
    }

    async fn find_by_short_url(&self, short_url: i64) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT original_url, short_url
            FROM mappings
            WHERE short_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(original_url, short_url)| Mapping::new(original_url, short_url)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM mappings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let (original_url, short_url) = sqlx::query_as::<_, (String, i64)>(
            r#"
            INSERT INTO mappings (original_url, short_url)
            VALUES ($1, $2)
            RETURNING original_url, short_url
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(new_mapping.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Mapping::new(original_url, short_url))
    }
}
