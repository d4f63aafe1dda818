//! Repository trait for the ad aggregate.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Ad, AdStatus};
use crate::error::AppError;

/// Storage contract for [`Ad`] aggregates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAdRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Inserts or updates an ad by id.
    ///
    /// The write only lands if the stored version is older than
    /// [`Ad::version`], so two writers that loaded the same version cannot
    /// both win.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a newer or equal version is already stored.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, ad: &Ad) -> Result<(), AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ad>, AppError>;

    /// All ads of one seller regardless of status, newest first.
    async fn find_by_seller_id(&self, seller_id: Uuid) -> Result<Vec<Ad>, AppError>;

    /// Ads in the given status, newest first, capped at 100.
    async fn find_by_status(&self, status: AdStatus) -> Result<Vec<Ad>, AppError>;

    /// Physically removes an ad. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
