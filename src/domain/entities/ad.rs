//! Ad aggregate root.
//!
//! All mutation goes through [`Ad::publish`], [`Ad::mark_as_sold`] and
//! [`Ad::update`]. Each one re-checks the aggregate invariants, bumps
//! `updated_at` and increments `version`, which storage uses as a
//! compare-and-swap token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::events::AdEvent;
use crate::domain::value_objects::{Category, Location, Price};
use crate::error::AppError;

pub const TITLE_MIN_LEN: usize = 5;
pub const TITLE_MAX_LEN: usize = 100;
pub const DESCRIPTION_MIN_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 2000;

/// Lifecycle of an ad. Transitions only move forward:
/// `DRAFT -> PUBLISHED -> SOLD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdStatus {
    Draft,
    Published,
    Sold,
}

impl AdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdStatus::Draft => "DRAFT",
            AdStatus::Published => "PUBLISHED",
            AdStatus::Sold => "SOLD",
        }
    }
}

impl FromStr for AdStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(AdStatus::Draft),
            "PUBLISHED" => Ok(AdStatus::Published),
            "SOLD" => Ok(AdStatus::Sold),
            _ => Err(AppError::bad_request(
                "Invalid ad status",
                json!({ "status": s, "allowed": ["DRAFT", "PUBLISHED", "SOLD"] }),
            )),
        }
    }
}

impl fmt::Display for AdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for [`Ad::create`].
#[derive(Debug, Clone)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: Location,
    pub category: Category,
    pub seller_id: Uuid,
    pub images: Vec<String>,
}

/// Partial update for an ad. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct AdPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub location: Option<Location>,
    pub images: Option<Vec<String>>,
}

impl AdPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
            && self.images.is_none()
    }
}

/// Stored state of an ad, used to rebuild the aggregate without re-running
/// creation rules.
#[derive(Debug, Clone)]
pub struct AdParts {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: Location,
    pub category: Category,
    pub seller_id: Uuid,
    pub status: AdStatus,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    id: Uuid,
    title: String,
    description: String,
    price: Price,
    location: Location,
    category: Category,
    seller_id: Uuid,
    status: AdStatus,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: i64,
    #[serde(skip)]
    events: Vec<AdEvent>,
}

impl Ad {
    /// Creates a new ad in `DRAFT` with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or description is out of bounds.
    pub fn create(new_ad: NewAd) -> Result<Self, AppError> {
        validate_title(&new_ad.title)?;
        validate_description(&new_ad.description)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: new_ad.title,
            description: new_ad.description,
            price: new_ad.price,
            location: new_ad.location,
            category: new_ad.category,
            seller_id: new_ad.seller_id,
            status: AdStatus::Draft,
            images: new_ad.images,
            created_at: now,
            updated_at: now,
            version: 1,
            events: Vec::new(),
        })
    }

    /// Rebuilds an ad from storage. No events are pending afterwards.
    pub fn restore(parts: AdParts) -> Self {
        Self {
            id: parts.id,
            title: parts.title,
            description: parts.description,
            price: parts.price,
            location: parts.location,
            category: parts.category,
            seller_id: parts.seller_id,
            status: parts.status,
            images: parts.images,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
            version: parts.version,
            events: Vec::new(),
        }
    }

    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] unless `actor_id` is the seller.
    pub fn ensure_owner(&self, actor_id: Uuid) -> Result<(), AppError> {
        if self.seller_id != actor_id {
            return Err(AppError::forbidden(
                "Only the seller can perform this action",
                json!({ "ad_id": self.id }),
            ));
        }
        Ok(())
    }

    /// Moves a draft to `PUBLISHED` and records [`AdEvent::Published`].
    ///
    /// Ownership is not checked here; callers acting for a user check it
    /// with [`Ad::ensure_owner`] first.
    pub fn publish(&mut self) -> Result<(), AppError> {
        if self.status != AdStatus::Draft {
            return Err(AppError::validation("Only draft ads can be published"));
        }

        self.status = AdStatus::Published;
        self.touch();
        self.events.push(AdEvent::Published {
            ad_id: self.id,
            seller_id: self.seller_id,
            title: self.title.clone(),
            occurred_at: self.updated_at,
        });
        Ok(())
    }

    pub fn mark_as_sold(&mut self, actor_id: Uuid) -> Result<(), AppError> {
        self.ensure_owner(actor_id)?;
        if self.status != AdStatus::Published {
            return Err(AppError::validation(
                "Only published ads can be marked as sold",
            ));
        }

        self.status = AdStatus::Sold;
        self.touch();
        self.events.push(AdEvent::Sold {
            ad_id: self.id,
            seller_id: self.seller_id,
            title: self.title.clone(),
            occurred_at: self.updated_at,
        });
        Ok(())
    }

    /// Applies the provided fields of `patch`.
    ///
    /// Validation happens before any field is written, so a failing patch
    /// leaves the ad untouched.
    pub fn update(&mut self, actor_id: Uuid, patch: AdPatch) -> Result<(), AppError> {
        self.ensure_owner(actor_id)?;
        if self.status == AdStatus::Sold {
            return Err(AppError::validation("Cannot update sold ads"));
        }

        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        if let Some(description) = &patch.description {
            validate_description(description)?;
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }

        self.touch();
        Ok(())
    }

    /// Snapshot of the pending events.
    pub fn domain_events(&self) -> Vec<AdEvent> {
        self.events.clone()
    }

    pub fn clear_domain_events(&mut self) {
        self.events.clear();
    }

    /// Returns and clears the pending events.
    pub fn take_domain_events(&mut self) -> Vec<AdEvent> {
        std::mem::take(&mut self.events)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn seller_id(&self) -> Uuid {
        self.seller_id
    }

    pub fn status(&self) -> AdStatus {
        self.status
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn version(&self) -> i64 {
        self.version
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().chars().count() < TITLE_MIN_LEN {
        return Err(AppError::validation("Title must be at least 5 characters"));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(AppError::validation("Title cannot exceed 100 characters"));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), AppError> {
    if description.trim().chars().count() < DESCRIPTION_MIN_LEN {
        return Err(AppError::validation(
            "Description must be at least 20 characters",
        ));
    }
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(AppError::validation(
            "Description cannot exceed 2000 characters",
        ));
    }
    Ok(())
}
