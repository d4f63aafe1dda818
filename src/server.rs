//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, cache selection, adapter wiring
//! and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, RedisCache};
use crate::infrastructure::persistence::{
    PgAdRepository, PgMessagingRepository, PgSearchRepository, PgUserRepository,
};
use crate::infrastructure::security::{AesEncryptionService, JwtTokenService};
use crate::routes::app_router;
use crate::state::{AppState, Ports};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the connection pool with the configured limits.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Redis when configured and reachable, the in-process cache otherwise.
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache: in-process (Redis not configured)");
        return Arc::new(MemoryCache::new());
    };

    match RedisCache::connect(redis_url).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using in-process cache.", e);
            Arc::new(MemoryCache::new())
        }
    }
}

/// Wires the PostgreSQL adapters, the cache and the security services.
pub fn build_ports(
    config: &Config,
    pool: Arc<PgPool>,
    cache: Arc<dyn CacheService>,
) -> Result<Ports> {
    let encryption = Arc::new(
        AesEncryptionService::new(&config.encryption_key).context("Invalid ENCRYPTION_KEY")?,
    );
    let tokens = Arc::new(JwtTokenService::new(
        &config.jwt_secret,
        config.jwt_expires_in,
        config.jwt_refresh_expires_in,
    ));

    Ok(Ports {
        ads: Arc::new(PgAdRepository::new(pool.clone())),
        search: Arc::new(PgSearchRepository::new(pool.clone())),
        messaging: Arc::new(PgMessagingRepository::new(pool.clone())),
        users: Arc::new(PgUserRepository::new(pool, encryption.clone())),
        encryption,
        tokens,
        cache,
    })
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Redis cache (or in-process fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let cache = connect_cache(&config).await;

    let pool = Arc::new(pool);
    let ports = build_ports(&config, pool.clone(), cache)?;
    let state = AppState::new(
        ports,
        pool,
        config.search_cache_ttl_seconds,
        config.session_ttl_seconds,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
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
