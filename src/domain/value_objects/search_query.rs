//! Search query value object and its cache key.

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::AppError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

/// Namespace shared by every search cache key.
pub const CACHE_KEY_PREFIX: &str = "search:";

/// Raw, unvalidated search parameters as received from a caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub city: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// A validated ad search.
///
/// Blank text filters are dropped, `page` is clamped to at least 1 and
/// `limit` to `1..=100`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    keyword: Option<String>,
    category: Option<Category>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    city: Option<String>,
    page: u32,
    limit: u32,
}

impl SearchQuery {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a negative or non-numeric price
    /// bound, `min_price > max_price`, or an unknown category.
    pub fn create(params: SearchParams) -> Result<Self, AppError> {
        if let Some(min) = params.min_price {
            if !min.is_finite() || min < 0.0 {
                return Err(AppError::validation("Minimum price cannot be negative"));
            }
        }
        if let Some(max) = params.max_price {
            if !max.is_finite() || max < 0.0 {
                return Err(AppError::validation("Maximum price cannot be negative"));
            }
        }
        if let (Some(min), Some(max)) = (params.min_price, params.max_price) {
            if min > max {
                return Err(AppError::validation(
                    "Minimum price cannot be greater than maximum price",
                ));
            }
        }

        let category = non_blank(params.category)
            .map(|c| c.parse::<Category>())
            .transpose()?;

        let page = params.page.map_or(DEFAULT_PAGE, |p| p.clamp(1, u32::MAX as i64) as u32);
        let limit = params
            .limit
            .map_or(DEFAULT_LIMIT, |l| l.clamp(1, MAX_LIMIT as i64) as u32);

        Ok(Self {
            keyword: non_blank(params.keyword),
            category,
            min_price: params.min_price,
            max_price: params.max_price,
            city: non_blank(params.city),
            page,
            limit,
        })
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn min_price(&self) -> Option<f64> {
        self.min_price
    }

    pub fn max_price(&self) -> Option<f64> {
        self.max_price
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Row offset of the first result on this page.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }

    /// Deterministic cache key: `search:` followed by the seven fields in a
    /// fixed order, joined by `:`.
    ///
    /// Keyword and city are lower-cased because matching on them is
    /// case-insensitive. Free-text fields are escaped so that a `:` inside a
    /// keyword cannot shift the positional layout.
    pub fn to_cache_key(&self) -> String {
        let parts = [
            self.keyword
                .as_deref()
                .map(|k| escape(&k.to_lowercase()))
                .unwrap_or_default(),
            self.category.map(|c| c.as_str().to_string()).unwrap_or_default(),
            self.min_price.map(|p| p.to_string()).unwrap_or_default(),
            self.max_price.map(|p| p.to_string()).unwrap_or_default(),
            self.city
                .as_deref()
                .map(|c| escape(&c.to_lowercase()))
                .unwrap_or_default(),
            self.page.to_string(),
            self.limit.to_string(),
        ];

        format!("{}{}", CACHE_KEY_PREFIX, parts.join(":"))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn escape(value: &str) -> String {
    value.replace('%', "%25").replace(':', "%3A")
}
