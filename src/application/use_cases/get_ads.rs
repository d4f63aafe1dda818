//! Lists ads by seller or by status.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Ad, AdStatus};
use crate::domain::repositories::AdRepository;
use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct AdsFilter {
    pub seller_id: Option<Uuid>,
    pub status: Option<AdStatus>,
}

pub struct GetAdsUseCase {
    ads: Arc<dyn AdRepository>,
}

impl GetAdsUseCase {
    pub fn new(ads: Arc<dyn AdRepository>) -> Self {
        Self { ads }
    }

    /// A seller filter wins over a status filter and returns every status.
    /// Without filters, the latest published ads are returned.
    pub async fn execute(&self, filter: AdsFilter) -> Result<Vec<Ad>, AppError> {
        if let Some(seller_id) = filter.seller_id {
            return self.ads.find_by_seller_id(seller_id).await;
        }

        let status = filter.status.unwrap_or(AdStatus::Published);
        self.ads.find_by_status(status).await
    }
}
