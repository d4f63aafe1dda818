//! One use case per business operation.
//!
//! Each use case owns its ports as `Arc<dyn Trait>` so the same struct runs
//! against PostgreSQL in production and against mocks in tests.

use uuid::Uuid;

use crate::domain::entities::Ad;
use crate::domain::events;
use crate::domain::repositories::AdRepository;
use crate::error::AppError;
use crate::infrastructure::cache::SearchCache;

pub mod authenticate;
pub mod create_ad;
pub mod get_ad;
pub mod get_ads;
pub mod get_conversation_messages;
pub mod get_conversations;
pub mod login;
pub mod mark_ad_as_sold;
pub mod publish_ad;
pub mod register_user;
pub mod search_ads;
pub mod send_message;
pub mod update_ad;

pub use authenticate::{AuthUser, AuthenticateUseCase};
pub use create_ad::{CreateAdCommand, CreateAdUseCase};
pub use get_ad::GetAdUseCase;
pub use get_ads::{AdsFilter, GetAdsUseCase};
pub use get_conversation_messages::GetConversationMessagesUseCase;
pub use get_conversations::GetConversationsUseCase;
pub use login::{LoginCommand, LoginResult, LoginUseCase};
pub use mark_ad_as_sold::MarkAdAsSoldUseCase;
pub use publish_ad::PublishAdUseCase;
pub use register_user::{RegisterUserCommand, RegisterUserUseCase};
pub use search_ads::{SearchAdsUseCase, SearchResult};
pub use send_message::{SendMessageCommand, SendMessageUseCase};
pub use update_ad::{UpdateAdCommand, UpdateAdUseCase};

pub(crate) async fn load_ad(ads: &dyn AdRepository, id: Uuid) -> Result<Ad, AppError> {
    ads.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::resource_not_found("Ad", id))
}

/// Persists a mutated ad, then drains and dispatches its events and drops
/// cached searches.
///
/// Events are only drained after the save succeeded; a failed save leaves
/// them queued on the instance.
pub(crate) async fn commit_ad(
    ads: &dyn AdRepository,
    search_cache: &SearchCache,
    ad: &mut Ad,
) -> Result<(), AppError> {
    ads.save(ad).await?;

    let pending = ad.take_domain_events();
    events::dispatch(&pending);

    search_cache.invalidate_ad_related().await;
    Ok(())
}
