//! In-process cache used when Redis is not configured.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

/// Writes between two sweeps of expired entries.
const SWEEP_EVERY: usize = 1024;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Concurrent map with per-entry TTL.
///
/// Expired entries are dropped on read, on pattern deletes, and by a sweep
/// every [`SWEEP_EVERY`] writes. Not shared between processes, so each
/// instance of the service keeps its own copy.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, Entry>,
    writes: AtomicUsize,
}

impl MemoryCache {
    pub fn new() -> Self {
        debug!("Using in-memory cache");
        Self::default()
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| e.expires_at > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sweep_expired(&self) {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        debug!(removed = before.saturating_sub(self.entries.len()), "Memory cache swept");
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                return Ok(Some(entry.value.clone()));
            }
        } else {
            return Ok(None);
        }

        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> CacheResult<()> {
        let expires_at = Instant::now()
            .checked_add(Duration::from_secs(ttl_seconds))
            .ok_or_else(|| CacheError::OperationError(format!("TTL out of range: {ttl_seconds}s")))?;

        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );

        if self.writes.fetch_add(1, Ordering::Relaxed) + 1 >= SWEEP_EVERY {
            self.writes.store(0, Ordering::Relaxed);
            self.sweep_expired();
        }
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> CacheResult<u64> {
        let matcher = glob::Pattern::new(pattern)
            .map_err(|e| CacheError::OperationError(format!("Invalid pattern {}: {}", pattern, e)))?;

        let now = Instant::now();
        let mut deleted = 0;
        self.entries.retain(|key, entry| {
            if matcher.matches(key) {
                if entry.expires_at > now {
                    deleted += 1;
                }
                false
            } else {
                true
            }
        });

        Ok(deleted)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
