//! Creates a draft ad.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Ad, NewAd};
use crate::domain::repositories::AdRepository;
use crate::domain::value_objects::{Category, Location, Price};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct CreateAdCommand {
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Defaults to EUR.
    pub currency: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: Option<String>,
    pub category: String,
    pub seller_id: Uuid,
    pub images: Vec<String>,
}

pub struct CreateAdUseCase {
    ads: Arc<dyn AdRepository>,
}

impl CreateAdUseCase {
    pub fn new(ads: Arc<dyn AdRepository>) -> Self {
        Self { ads }
    }

    /// Validates the input, builds a `DRAFT` ad and saves it.
    ///
    /// Drafts are not searchable, so the search cache is left alone.
    pub async fn execute(&self, command: CreateAdCommand) -> Result<Ad, AppError> {
        let price = match command.currency.as_deref() {
            Some(currency) => Price::create(command.price, currency)?,
            None => Price::new(command.price, Default::default())?,
        };
        let location = Location::create(
            &command.city,
            &command.postal_code,
            command.country.as_deref(),
        )?;
        let category: Category = command.category.parse()?;

        let ad = Ad::create(NewAd {
            title: command.title,
            description: command.description,
            price,
            location,
            category,
            seller_id: command.seller_id,
            images: command.images,
        })?;

        self.ads.save(&ad).await?;

        tracing::info!(ad_id = %ad.id(), seller_id = %ad.seller_id(), "Ad created");
        Ok(ad)
    }
}
