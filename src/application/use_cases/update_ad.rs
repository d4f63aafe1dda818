//! Partial update of an ad by its seller.

use std::sync::Arc;
use uuid::Uuid;

use super::{commit_ad, load_ad};
use crate::domain::entities::{Ad, AdPatch, AdStatus};
use crate::domain::repositories::AdRepository;
use crate::domain::value_objects::{Location, Price};
use crate::error::AppError;
use crate::infrastructure::cache::SearchCache;

/// Raw update input. Absent fields are left unchanged.
///
/// Price and location are replaced as a whole: `price` without `currency`
/// keeps the current currency, and `city`/`postal_code` must come together.
#[derive(Debug, Clone, Default)]
pub struct UpdateAdCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub images: Option<Vec<String>>,
}

pub struct UpdateAdUseCase {
    ads: Arc<dyn AdRepository>,
    search_cache: SearchCache,
}

impl UpdateAdUseCase {
    pub fn new(ads: Arc<dyn AdRepository>, search_cache: SearchCache) -> Self {
        Self { ads, search_cache }
    }

    /// Ownership and status are checked before any input is looked at, so a
    /// non-seller always gets [`AppError::Forbidden`].
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the ad does not exist
    /// - [`AppError::Forbidden`] if the actor is not the seller
    /// - [`AppError::Validation`] for a sold ad, an empty patch or invalid fields
    pub async fn execute(
        &self,
        ad_id: Uuid,
        actor_id: Uuid,
        command: UpdateAdCommand,
    ) -> Result<Ad, AppError> {
        let mut ad = load_ad(self.ads.as_ref(), ad_id).await?;
        ad.ensure_owner(actor_id)?;
        if ad.status() == AdStatus::Sold {
            return Err(AppError::validation("Cannot update sold ads"));
        }

        let patch = build_patch(&ad, command)?;
        if patch.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        ad.update(actor_id, patch)?;

        commit_ad(self.ads.as_ref(), &self.search_cache, &mut ad).await?;

        tracing::info!(ad_id = %ad_id, version = ad.version(), "Ad updated");
        Ok(ad)
    }
}

fn build_patch(current: &Ad, command: UpdateAdCommand) -> Result<AdPatch, AppError> {
    let price = match (command.price, command.currency.as_deref()) {
        (None, None) => None,
        (Some(amount), Some(currency)) => Some(Price::create(amount, currency)?),
        (Some(amount), None) => Some(Price::new(amount, current.price().currency())?),
        (None, Some(currency)) => Some(Price::create(current.price().amount(), currency)?),
    };

    let location = match (command.city.as_deref(), command.postal_code.as_deref()) {
        (None, None) => None,
        (Some(city), Some(postal_code)) => Some(Location::create(
            city,
            postal_code,
            Some(current.location().country()),
        )?),
        _ => {
            return Err(AppError::validation(
                "City and postal code must be updated together",
            ));
        }
    };

    Ok(AdPatch {
        title: command.title,
        description: command.description,
        price,
        location,
        images: command.images,
    })
}
