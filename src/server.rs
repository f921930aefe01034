//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, RedisLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the link store described by the configuration.
///
/// Uses Redis when configured; otherwise falls back to an in-memory store.
///
/// # Errors
///
/// Returns an error if Redis is configured but unreachable.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match &config.redis_url {
        Some(redis_url) => {
            let redis = RedisLinkRepository::connect(redis_url, &config.redis_key_prefix)
                .await
                .context("Failed to connect to Redis")?;
            tracing::info!("Store enabled (Redis)");
            Ok(Arc::new(redis))
        }
        None => {
            tracing::warn!("Redis not configured. Links are kept in memory and lost on restart.");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
    }
}

/// Builds the link service from configuration and an opened store.
pub fn build_link_service(
    config: &Config,
    repository: Arc<dyn LinkRepository>,
) -> Result<LinkService<dyn LinkRepository>> {
    let generator = config.code_generator()?;
    tracing::info!(
        code_length = generator.length(),
        alphabet_size = generator.alphabet().len(),
        max_attempts = config.code_max_attempts,
        "Code generator ready"
    );

    Ok(LinkService::new(repository, generator, config.base_url.clone())
        .with_max_attempts(config.code_max_attempts))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_store(&config).await?;
    let link_service = build_link_service(&config, repository)?;

    let state = AppState::new(Arc::new(link_service));
    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
