//! Marks a published ad as sold.

use std::sync::Arc;
use uuid::Uuid;

use super::{commit_ad, load_ad};
use crate::domain::entities::Ad;
use crate::domain::repositories::AdRepository;
use crate::error::AppError;
use crate::infrastructure::cache::SearchCache;

pub struct MarkAdAsSoldUseCase {
    ads: Arc<dyn AdRepository>,
    search_cache: SearchCache,
}

impl MarkAdAsSoldUseCase {
    pub fn new(ads: Arc<dyn AdRepository>, search_cache: SearchCache) -> Self {
        Self { ads, search_cache }
    }

    pub async fn execute(&self, ad_id: Uuid, actor_id: Uuid) -> Result<Ad, AppError> {
        let mut ad = load_ad(self.ads.as_ref(), ad_id).await?;

        ad.mark_as_sold(actor_id)?;

        commit_ad(self.ads.as_ref(), &self.search_cache, &mut ad).await?;

        tracing::info!(ad_id = %ad_id, "Ad marked as sold");
        Ok(ad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{draft_ad, published_ad};
    use crate::domain::entities::AdStatus;
    use crate::domain::repositories::MockAdRepository;
    use crate::infrastructure::cache::MemoryCache;

    fn search_cache() -> SearchCache {
        SearchCache::new(Arc::new(MemoryCache::new()), 300)
    }

    #[tokio::test]
    async fn test_sells_published_ad() {
        let seller = Uuid::new_v4();
        let ad = published_ad(seller);
        let id = ad.id();

        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(ad.clone())));
        repo.expect_save()
            .withf(|ad| ad.status() == AdStatus::Sold)
            .times(1)
            .returning(|_| Ok(()));

        let sold = MarkAdAsSoldUseCase::new(Arc::new(repo), search_cache())
            .execute(id, seller)
            .await
            .unwrap();
        assert_eq!(sold.status(), AdStatus::Sold);
    }

    #[tokio::test]
    async fn test_draft_cannot_be_sold() {
        let seller = Uuid::new_v4();
        let ad = draft_ad(seller);
        let id = ad.id();

        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(ad.clone())));
        repo.expect_save().times(0);

        let err = MarkAdAsSoldUseCase::new(Arc::new(repo), search_cache())
            .execute(id, seller)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Only published ads can be marked as sold");
    }

    #[tokio::test]
    async fn test_non_owner_is_forbidden() {
        let ad = published_ad(Uuid::new_v4());
        let id = ad.id();

        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(ad.clone())));
        repo.expect_save().times(0);

        let err = MarkAdAsSoldUseCase::new(Arc::new(repo), search_cache())
            .execute(id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }
}
