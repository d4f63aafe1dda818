//! DTOs for ad endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::use_cases::{AdsFilter, CreateAdCommand, UpdateAdCommand};
use crate::domain::entities::{Ad, AdStatus};
use crate::error::AppError;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// `EUR` when omitted.
    pub currency: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: Option<String>,
    pub category: String,

    #[serde(default)]
    #[validate(length(max = 10, message = "An ad can have at most 10 images"))]
    pub images: Vec<String>,
}

impl CreateAdRequest {
    pub fn into_command(self, seller_id: Uuid) -> CreateAdCommand {
        CreateAdCommand {
            title: self.title,
            description: self.description,
            price: self.price,
            currency: self.currency,
            city: self.city,
            postal_code: self.postal_code,
            country: self.country,
            category: self.category,
            seller_id,
            images: self.images,
        }
    }
}

/// Partial update. Only provided fields change.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,

    #[validate(length(max = 10, message = "An ad can have at most 10 images"))]
    pub images: Option<Vec<String>>,
}

impl From<UpdateAdRequest> for UpdateAdCommand {
    fn from(req: UpdateAdRequest) -> Self {
        UpdateAdCommand {
            title: req.title,
            description: req.description,
            price: req.price,
            currency: req.currency,
            city: req.city,
            postal_code: req.postal_code,
            images: req.images,
        }
    }
}

/// `GET /ads` filters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdsQuery {
    pub seller_id: Option<Uuid>,
    pub status: Option<String>,
}

impl AdsQuery {
    pub fn into_filter(self) -> Result<AdsFilter, AppError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<AdStatus>)
            .transpose()?;

        Ok(AdsFilter {
            seller_id: self.seller_id,
            status,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: PriceResponse,
    pub location: LocationResponse,
    pub category: String,
    pub seller_id: Uuid,
    pub status: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Ad> for AdResponse {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id(),
            title: ad.title().to_string(),
            description: ad.description().to_string(),
            price: PriceResponse {
                amount: ad.price().amount(),
                currency: ad.price().currency().to_string(),
            },
            location: LocationResponse {
                city: ad.location().city().to_string(),
                postal_code: ad.location().postal_code().to_string(),
                country: ad.location().country().to_string(),
            },
            category: ad.category().as_str().to_string(),
            seller_id: ad.seller_id(),
            status: ad.status().to_string(),
            images: ad.images().to_vec(),
            created_at: ad.created_at(),
            updated_at: ad.updated_at(),
        }
    }
}
