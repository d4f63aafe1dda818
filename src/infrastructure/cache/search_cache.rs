//! Search result memoization on top of [`CacheService`].

use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, warn};

use super::service::CacheService;
use crate::domain::value_objects::search_query::CACHE_KEY_PREFIX;

/// Typed JSON view of the cache for search envelopes.
///
/// Cache faults never fail a search: a broken read is a miss and a broken
/// write is logged and skipped.
#[derive(Clone)]
pub struct SearchCache {
    cache: Arc<dyn CacheService>,
    ttl_seconds: u64,
}

impl SearchCache {
    pub fn new(cache: Arc<dyn CacheService>, ttl_seconds: u64) -> Self {
        Self { cache, ttl_seconds }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.cache.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "Search cache read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Discarding undecodable search cache entry");
                None
            }
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "Search result not cacheable");
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &raw, self.ttl_seconds).await {
            warn!(key, error = %e, "Search cache write failed");
        }
    }

    /// Drops every cached search. Called after any ad mutation that can
    /// change what a search returns.
    pub async fn invalidate_ad_related(&self) {
        let pattern = format!("{}*", CACHE_KEY_PREFIX);
        match self.cache.delete_pattern(&pattern).await {
            Ok(deleted) => debug!(deleted, "Search cache invalidated"),
            Err(e) => warn!(error = %e, "Search cache invalidation failed"),
        }
    }
}
