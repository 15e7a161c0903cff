//! Server initialization and runtime setup.
//!
//! Builds the configured storage backend, wires the link service, and runs the
//! HTTP and gRPC fronts side by side until Ctrl-C.

use crate::application::services::{LinkService, LinkUseCase};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::rpc::LinksHandler;
use crate::state::AppState;
use crate::utils::code_generator::Sha256CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

/// Runs both delivery fronts with the given configuration.
///
/// Initializes:
/// - Link repository (in-memory map or PostgreSQL pool + migrations)
/// - Link service with a SHA-256 code generator
/// - Axum HTTP server
/// - Tonic gRPC server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Either server fails to bind or stops with an error
pub async fn run(config: Config) -> Result<()> {
    let link_repository = build_repository(&config).await?;
    let code_generator = Arc::new(Sha256CodeGenerator::from_os_rng());
    let link_service: Arc<dyn LinkUseCase> =
        Arc::new(LinkService::new(link_repository, code_generator));

    let state = AppState::new(link_service.clone(), config.storage_backend.as_str());

    tokio::try_join!(
        serve_http(&config, state),
        serve_grpc(&config, link_service)
    )?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Creates the repository selected by `config.storage_backend`.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match config.storage_backend {
        StorageBackend::InMemory => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("PostgreSQL connection string is not configured")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .min_connections(config.db_min_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
    }
}

async fn serve_http(config: &Config, state: AppState) -> Result<()> {
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.http_addr())
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {}", config.http_addr()))?;
    tracing::info!("HTTP listening on http://{}", listener.local_addr()?);

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("HTTP server error")
}

async fn serve_grpc(config: &Config, link_service: Arc<dyn LinkUseCase>) -> Result<()> {
    let addr = tokio::net::lookup_host(config.grpc_addr())
        .await
        .with_context(|| format!("Failed to resolve gRPC address {}", config.grpc_addr()))?
        .next()
        .with_context(|| format!("No address found for {}", config.grpc_addr()))?;
    tracing::info!("gRPC listening on {addr}");

    tonic::transport::Server::builder()
        .add_service(LinksHandler::new(link_service).into_service())
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .context("gRPC server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
