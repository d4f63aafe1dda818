//! Full-text search over published ads, memoized in the search cache.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::Ad;
use crate::domain::repositories::SearchRepository;
use crate::domain::value_objects::{SearchParams, SearchQuery};
use crate::error::AppError;
use crate::infrastructure::cache::SearchCache;

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub ads: Vec<Ad>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

impl SearchResult {
    fn new(ads: Vec<Ad>, total: i64, query: &SearchQuery) -> Self {
        let limit = i64::from(query.limit());
        Self {
            ads,
            total,
            page: query.page(),
            limit: query.limit(),
            total_pages: (total + limit - 1) / limit,
        }
    }
}

pub struct SearchAdsUseCase {
    search: Arc<dyn SearchRepository>,
    search_cache: SearchCache,
}

impl SearchAdsUseCase {
    pub fn new(search: Arc<dyn SearchRepository>, search_cache: SearchCache) -> Self {
        Self {
            search,
            search_cache,
        }
    }

    /// Validates the parameters, then serves the page from cache or runs the
    /// page query and the count query concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid parameters. Cache faults
    /// are never surfaced.
    pub async fn execute(&self, params: SearchParams) -> Result<SearchResult, AppError> {
        let query = SearchQuery::create(params)?;
        let key = query.to_cache_key();

        if let Some(cached) = self.search_cache.get::<SearchResult>(&key).await {
            debug!(key = %key, "Search cache hit");
            metrics::counter!("search_cache_hits_total").increment(1);
            return Ok(cached);
        }
        debug!(key = %key, "Search cache miss");
        metrics::counter!("search_cache_misses_total").increment(1);

        let (ads, total) =
            tokio::try_join!(self.search.search(&query), self.search.count(&query))?;

        let result = SearchResult::new(ads, total, &query);
        self.search_cache.set(&key, &result).await;

        Ok(result)
    }
}
