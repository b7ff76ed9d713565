//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, service wiring and the Axum server lifecycle.

use crate::application::services::MappingService;
use crate::application::validator::HostnameValidator;
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::{InMemoryMappingRepository, PgMappingRepository};
use crate::routes::{AssetDirs, app_router};
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (PostgreSQL pool, or in-memory when no database is configured)
/// - Migrations (failures are logged, startup continues)
/// - Mapping service with the system DNS resolver
/// - Axum HTTP server
///
/// The pool connects lazily, so an unreachable database does not stop the
/// process; affected requests fail individually until it comes back.
///
/// # Errors
///
/// Returns an error if:
/// - The database URL cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let validator = Arc::new(HostnameValidator::system());
    let mapping_service = Arc::new(MappingService::new(repository, validator));
    let state = AppState::new(mapping_service, config.strict_status_codes);

    let assets = AssetDirs {
        static_dir: Path::new(&config.static_dir),
        views_dir: Path::new(&config.views_dir),
    };
    let app = app_router(state, &assets);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn build_repository(config: &Config) -> Result<Arc<dyn MappingRepository>> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, mappings are kept in memory only");
        return Ok(Arc::new(InMemoryMappingRepository::new()));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy(database_url)?;

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => tracing::info!("Connected to database"),
        Err(e) => tracing::error!("Failed to migrate database: {}", e),
    }

    Ok(Arc::new(PgMappingRepository::new(Arc::new(pool))))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
