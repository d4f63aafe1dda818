//! Cache port and error types.

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;

use crate::error::AppError;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        AppError::internal("Cache error", json!({ "reason": e.to_string() }))
    }
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value cache with per-entry TTL. Values are opaque strings (JSON by
/// convention).
///
/// Entries older than their TTL must read as absent. Eviction itself is the
/// backend's business.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - shared Redis cache, fail-open
/// - [`crate::infrastructure::cache::MemoryCache`] - in-process fallback
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns `Ok(None)` on a miss or an expired entry.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()>;

    /// Removes every key matching a glob pattern (`*`, `?`, `[...]`).
    /// Returns how many keys were removed.
    async fn delete_pattern(&self, pattern: &str) -> CacheResult<u64>;

    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
