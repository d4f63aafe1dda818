//! PostgreSQL implementation of the ad repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Ad, AdParts, AdStatus};
use crate::domain::repositories::AdRepository;
use crate::domain::value_objects::{Location, Price};
use crate::error::AppError;

/// Column list shared by every query that loads ads.
pub(crate) const AD_COLUMNS: &str = "id, title, description, price_amount::float8 AS price_amount, \
     price_currency, city, postal_code, country, category, seller_id, status, images, \
     version, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub(crate) struct AdRow {
    id: Uuid,
    title: String,
    description: String,
    price_amount: f64,
    price_currency: String,
    city: String,
    postal_code: String,
    country: String,
    category: String,
    seller_id: Uuid,
    status: String,
    images: Vec<String>,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AdRow {
    /// Rebuilds the aggregate. A row that no longer satisfies the value
    /// object rules is reported as an internal fault, not a client error.
    pub(crate) fn into_ad(self) -> Result<Ad, AppError> {
        let id = self.id;
        let corrupt = |e: AppError| {
            AppError::internal(
                "Corrupt ad row",
                json!({ "id": id, "reason": e.message() }),
            )
        };

        let price = Price::create(self.price_amount, self.price_currency.trim()).map_err(corrupt)?;
        let location =
            Location::create(&self.city, self.postal_code.trim(), Some(&self.country)).map_err(corrupt)?;

        Ok(Ad::restore(AdParts {
            id,
            title: self.title,
            description: self.description,
            price,
            location,
            category: self.category.parse().map_err(corrupt)?,
            seller_id: self.seller_id,
            status: self.status.parse().map_err(corrupt)?,
            images: self.images,
            created_at: self.created_at,
            updated_at: self.updated_at,
            version: self.version,
        }))
    }
}

pub(crate) fn rows_into_ads(rows: Vec<AdRow>) -> Result<Vec<Ad>, AppError> {
    rows.into_iter().map(AdRow::into_ad).collect()
}

/// PostgreSQL repository for ad aggregates.
///
/// `save` is a versioned upsert: an existing row is only overwritten when its
/// `version` is lower than the incoming one.
pub struct PgAdRepository {
    pool: Arc<PgPool>,
}

impl PgAdRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    async fn save(&self, ad: &Ad) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO ads (
                id, title, description, price_amount, price_currency,
                city, postal_code, country, category, seller_id,
                status, images, version, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                price_amount = EXCLUDED.price_amount,
                price_currency = EXCLUDED.price_currency,
                city = EXCLUDED.city,
                postal_code = EXCLUDED.postal_code,
                country = EXCLUDED.country,
                status = EXCLUDED.status,
                images = EXCLUDED.images,
                version = EXCLUDED.version,
                updated_at = EXCLUDED.updated_at
            WHERE ads.version < EXCLUDED.version
            "#,
        )
        .bind(ad.id())
        .bind(ad.title())
        .bind(ad.description())
        .bind(ad.price().amount())
        .bind(ad.price().currency().as_str())
        .bind(ad.location().city())
        .bind(ad.location().postal_code())
        .bind(ad.location().country())
        .bind(ad.category().as_str())
        .bind(ad.seller_id())
        .bind(ad.status().as_str())
        .bind(ad.images())
        .bind(ad.version())
        .bind(ad.created_at())
        .bind(ad.updated_at())
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::conflict(
                "Ad was modified concurrently",
                json!({ "id": ad.id(), "version": ad.version() }),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ad>, AppError> {
        let sql = format!("SELECT {AD_COLUMNS} FROM ads WHERE id = $1");

        let row = sqlx::query_as::<_, AdRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(AdRow::into_ad).transpose()
    }

    async fn find_by_seller_id(&self, seller_id: Uuid) -> Result<Vec<Ad>, AppError> {
        let sql = format!(
            "SELECT {AD_COLUMNS} FROM ads WHERE seller_id = $1 ORDER BY created_at DESC"
        );

        let rows = sqlx::query_as::<_, AdRow>(&sql)
            .bind(seller_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        rows_into_ads(rows)
    }

    async fn find_by_status(&self, status: AdStatus) -> Result<Vec<Ad>, AppError> {
        let sql = format!(
            "SELECT {AD_COLUMNS} FROM ads WHERE status = $1 ORDER BY created_at DESC LIMIT 100"
        );

        let rows = sqlx::query_as::<_, AdRow>(&sql)
            .bind(status.as_str())
            .fetch_all(self.pool.as_ref())
            .await?;

        rows_into_ads(rows)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
