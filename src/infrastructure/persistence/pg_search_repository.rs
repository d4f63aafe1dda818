//! PostgreSQL implementation of the search port.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::pg_ad_repository::{AD_COLUMNS, AdRow, rows_into_ads};
use crate::domain::entities::Ad;
use crate::domain::repositories::SearchRepository;
use crate::domain::value_objects::SearchQuery;
use crate::error::AppError;

/// Filters shared by `search` and `count`. Absent filters bind `NULL` and
/// drop out of the predicate. `$1` is always `PUBLISHED`.
const SEARCH_FILTER: &str = r#"
    status = $1
    AND ($2::text IS NULL
         OR to_tsvector('french', title || ' ' || description) @@ plainto_tsquery('french', $2))
    AND ($3::text IS NULL OR category = $3)
    AND ($4::float8 IS NULL OR price_amount >= $4)
    AND ($5::float8 IS NULL OR price_amount <= $5)
    AND ($6::text IS NULL OR LOWER(city) = LOWER($6))
"#;

/// Full-text search over published ads using the French text configuration.
pub struct PgSearchRepository {
    pool: Arc<PgPool>,
}

impl PgSearchRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchRepository for PgSearchRepository {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Ad>, AppError> {
        let sql = format!(
            "SELECT {AD_COLUMNS} FROM ads WHERE {SEARCH_FILTER} \
             ORDER BY created_at DESC LIMIT $7 OFFSET $8"
        );

        let rows = sqlx::query_as::<_, AdRow>(&sql)
            .bind("PUBLISHED")
            .bind(query.keyword())
            .bind(query.category().map(|c| c.as_str()))
            .bind(query.min_price())
            .bind(query.max_price())
            .bind(query.city())
            .bind(query.limit() as i64)
            .bind(query.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        rows_into_ads(rows)
    }

    async fn count(&self, query: &SearchQuery) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM ads WHERE {SEARCH_FILTER}");

        let total = sqlx::query_scalar::<_, i64>(&sql)
            .bind("PUBLISHED")
            .bind(query.keyword())
            .bind(query.category().map(|c| c.as_str()))
            .bind(query.min_price())
            .bind(query.max_price())
            .bind(query.city())
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }
}
