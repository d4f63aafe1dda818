//! Caching layer for search results and login sessions.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - shared Redis cache
//! - [`MemoryCache`] - in-process fallback when Redis is not configured
//!
//! [`SearchCache`] layers typed JSON access and search invalidation on top.

mod memory_cache;
mod redis_cache;
mod search_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;
pub use search_cache::SearchCache;
pub use service::{CacheError, CacheResult, CacheService};

#[cfg(test)]
pub use service::MockCacheService;
