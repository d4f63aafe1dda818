//! Loads a single ad.

use std::sync::Arc;
use uuid::Uuid;

use super::load_ad;
use crate::domain::entities::Ad;
use crate::domain::repositories::AdRepository;
use crate::error::AppError;

pub struct GetAdUseCase {
    ads: Arc<dyn AdRepository>,
}

impl GetAdUseCase {
    pub fn new(ads: Arc<dyn AdRepository>) -> Self {
        Self { ads }
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no ad has this id.
    pub async fn execute(&self, id: Uuid) -> Result<Ad, AppError> {
        load_ad(self.ads.as_ref(), id).await
    }
}
