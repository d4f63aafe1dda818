//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

const SCAN_BATCH: usize = 200;

/// Redis cache shared by every instance of the service.
///
/// Uses `ConnectionManager` for automatic reconnection. Reads and pattern
/// deletes are fail-open: errors are logged and reported as a miss or a
/// no-op. Writes report errors; callers caching derived data ignore them,
/// session writes do not.
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    /// Connects and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut ping_conn = manager.clone();
        ping_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { conn: manager })
    }

    async fn scan_keys(&self, pattern: &str) -> redis::RedisResult<Vec<String>> {
        let mut conn = self.conn.clone();
        let mut cursor: u64 = 0;
        let mut keys = Vec::new();

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;

            keys.extend(batch);
            if next == 0 {
                return Ok(keys);
            }
            cursor = next;
        }
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(key).await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!("Redis GET error for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let mut conn = self.conn.clone();

        match conn.set_ex::<_, _, ()>(key, value, ttl_seconds).await {
            Ok(_) => {
                debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
                Ok(())
            }
            Err(e) => {
                warn!("Redis SET error for {}: {}", key, e);
                Err(CacheError::OperationError(e.to_string()))
            }
        }
    }

    async fn delete_pattern(&self, pattern: &str) -> CacheResult<u64> {
        let keys = match self.scan_keys(pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Redis SCAN error for {}: {}", pattern, e);
                return Ok(0);
            }
        };

        if keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn.clone();
        match conn.del::<_, u64>(&keys).await {
            Ok(deleted) => {
                debug!("Cache INVALIDATE: {} ({} keys)", pattern, deleted);
                Ok(deleted)
            }
            Err(e) => {
                warn!("Redis DEL error for {}: {}", pattern, e);
                Ok(0)
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}
