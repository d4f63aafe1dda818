//! Publishes a draft ad.

use std::sync::Arc;
use uuid::Uuid;

use super::{commit_ad, load_ad};
use crate::domain::entities::Ad;
use crate::domain::repositories::AdRepository;
use crate::error::AppError;
use crate::infrastructure::cache::SearchCache;

pub struct PublishAdUseCase {
    ads: Arc<dyn AdRepository>,
    search_cache: SearchCache,
}

impl PublishAdUseCase {
    pub fn new(ads: Arc<dyn AdRepository>, search_cache: SearchCache) -> Self {
        Self { ads, search_cache }
    }

    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the ad does not exist
    /// - [`AppError::Forbidden`] if `actor_id` is not the seller
    /// - [`AppError::Validation`] if the ad is not a draft
    pub async fn execute(&self, ad_id: Uuid, actor_id: Uuid) -> Result<Ad, AppError> {
        let mut ad = load_ad(self.ads.as_ref(), ad_id).await?;

        ad.ensure_owner(actor_id)?;
        ad.publish()?;

        commit_ad(self.ads.as_ref(), &self.search_cache, &mut ad).await?;

        tracing::info!(ad_id = %ad_id, "Ad published");
        Ok(ad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::{draft_ad, published_ad};
    use crate::domain::entities::AdStatus;
    use crate::domain::repositories::MockAdRepository;
    use crate::infrastructure::cache::MockCacheService;

    fn cache_expecting_invalidations(times: usize) -> SearchCache {
        let mut cache = MockCacheService::new();
        cache
            .expect_delete_pattern()
            .withf(|pattern| pattern == "search:*")
            .times(times)
            .returning(|_| Ok(0));
        SearchCache::new(Arc::new(cache), 300)
    }

    #[tokio::test]
    async fn test_publish_saves_and_invalidates_search_cache() {
        let seller = Uuid::new_v4();
        let ad = draft_ad(seller);
        let id = ad.id();

        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(ad.clone())));
        repo.expect_save()
            .withf(|ad| ad.status() == AdStatus::Published && ad.version() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = PublishAdUseCase::new(Arc::new(repo), cache_expecting_invalidations(1));
        let published = use_case.execute(id, seller).await.unwrap();

        assert_eq!(published.status(), AdStatus::Published);
        assert!(published.domain_events().is_empty(), "events are drained after commit");
    }

    #[tokio::test]
    async fn test_only_the_seller_can_publish() {
        let ad = draft_ad(Uuid::new_v4());
        let id = ad.id();

        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(ad.clone())));
        repo.expect_save().times(0);

        let use_case = PublishAdUseCase::new(Arc::new(repo), cache_expecting_invalidations(0));
        let err = use_case.execute(id, Uuid::new_v4()).await.unwrap_err();

        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_cannot_publish_twice() {
        let seller = Uuid::new_v4();
        let ad = published_ad(seller);
        let id = ad.id();

        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(ad.clone())));
        repo.expect_save().times(0);

        let use_case = PublishAdUseCase::new(Arc::new(repo), cache_expecting_invalidations(0));
        let err = use_case.execute(id, seller).await.unwrap_err();

        assert_eq!(err.message(), "Only draft ads can be published");
    }

    #[tokio::test]
    async fn test_missing_ad() {
        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = PublishAdUseCase::new(Arc::new(repo), cache_expecting_invalidations(0));
        let err = use_case
            .execute(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_failed_save_skips_invalidation() {
        let seller = Uuid::new_v4();
        let ad = draft_ad(seller);
        let id = ad.id();

        let mut repo = MockAdRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(ad.clone())));
        repo.expect_save().times(1).returning(|_| {
            Err(AppError::conflict(
                "Ad was modified concurrently",
                serde_json::json!({}),
            ))
        });

        let use_case = PublishAdUseCase::new(Arc::new(repo), cache_expecting_invalidations(0));
        let err = use_case.execute(id, seller).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }
}
