#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use shorturl::application::services::MappingService;
use shorturl::application::validator::{HostResolver, HostnameValidator, LookupError};
use shorturl::domain::entities::{Mapping, NewMapping};
use shorturl::domain::repositories::MappingRepository;
use shorturl::error::AppError;
use shorturl::infrastructure::persistence::InMemoryMappingRepository;
use shorturl::routes::{AssetDirs, router};
use shorturl::state::AppState;
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;
use std::sync::Arc;

/// Resolver that only knows a fixed set of host names.
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        if self.hosts.contains(host) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))])
        } else {
            Err(LookupError::NotFound {
                host: host.to_string(),
            })
        }
    }
}

/// Store whose every operation fails.
pub struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn find_by_original_url(&self, _: &str) -> Result<Option<Mapping>, AppError> {
        Err(AppError::internal("Internal server error"))
    }

    async fn find_by_short_url(&self, _: i64) -> Result<Option<Mapping>, AppError> {
        Err(AppError::internal("Internal server error"))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Internal server error"))
    }

    async fn insert(&self, _: NewMapping) -> Result<Mapping, AppError> {
        Err(AppError::internal("Internal server error"))
    }
}

pub const KNOWN_HOSTS: &[&str] = &["example.com", "www.example.com", "rust-lang.org"];

pub fn create_state_with(repository: Arc<dyn MappingRepository>, strict: bool) -> AppState {
    let validator = Arc::new(HostnameValidator::new(Arc::new(StaticResolver::new(
        KNOWN_HOSTS,
    ))));
    AppState::new(Arc::new(MappingService::new(repository, validator)), strict)
}

pub fn create_test_state(strict: bool) -> (AppState, Arc<InMemoryMappingRepository>) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let state = create_state_with(repository.clone(), strict);
    (state, repository)
}

pub fn create_test_app(state: AppState) -> Router {
    let assets = AssetDirs {
        static_dir: Path::new("public"),
        views_dir: Path::new("views"),
    };
    router(state, &assets)
}
