//! Read-side search port over published ads.

use async_trait::async_trait;

use crate::domain::entities::Ad;
use crate::domain::value_objects::SearchQuery;
use crate::error::AppError;

/// Filtered, paginated search over `PUBLISHED` ads.
///
/// Filters: full-text keyword over title and description, exact category,
/// inclusive price bounds, case-insensitive exact city. Results are newest
/// first and paged with `offset = (page - 1) * limit`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchRepository: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Ad>, AppError>;

    /// Total number of matches, ignoring pagination.
    async fn count(&self, query: &SearchQuery) -> Result<i64, AppError>;
}
