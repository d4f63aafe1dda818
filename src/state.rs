//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::use_cases::{
    AuthenticateUseCase, CreateAdUseCase, GetAdUseCase, GetAdsUseCase,
    GetConversationMessagesUseCase, GetConversationsUseCase, LoginUseCase, MarkAdAsSoldUseCase,
    PublishAdUseCase, RegisterUserUseCase, SearchAdsUseCase, SendMessageUseCase, UpdateAdUseCase,
};
use crate::domain::repositories::{
    AdRepository, MessagingRepository, SearchRepository, UserRepository,
};
use crate::domain::security::{EncryptionService, TokenService};
use crate::infrastructure::cache::{CacheService, SearchCache};

/// Adapters the use cases are wired against.
#[derive(Clone)]
pub struct Ports {
    pub ads: Arc<dyn AdRepository>,
    pub search: Arc<dyn SearchRepository>,
    pub messaging: Arc<dyn MessagingRepository>,
    pub users: Arc<dyn UserRepository>,
    pub encryption: Arc<dyn EncryptionService>,
    pub tokens: Arc<dyn TokenService>,
    pub cache: Arc<dyn CacheService>,
}

#[derive(Clone)]
pub struct AppState {
    pub create_ad: Arc<CreateAdUseCase>,
    pub get_ad: Arc<GetAdUseCase>,
    pub get_ads: Arc<GetAdsUseCase>,
    pub update_ad: Arc<UpdateAdUseCase>,
    pub publish_ad: Arc<PublishAdUseCase>,
    pub mark_ad_as_sold: Arc<MarkAdAsSoldUseCase>,
    pub search_ads: Arc<SearchAdsUseCase>,
    pub send_message: Arc<SendMessageUseCase>,
    pub get_conversations: Arc<GetConversationsUseCase>,
    pub get_conversation_messages: Arc<GetConversationMessagesUseCase>,
    pub register_user: Arc<RegisterUserUseCase>,
    pub login: Arc<LoginUseCase>,
    pub authenticate: Arc<AuthenticateUseCase>,
    pub cache: Arc<dyn CacheService>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Builds every use case over the given ports.
    ///
    /// `db` is only used by the health check; repositories get their own
    /// handle through `ports`.
    pub fn new(
        ports: Ports,
        db: Arc<PgPool>,
        search_cache_ttl_seconds: u64,
        session_ttl_seconds: u64,
    ) -> Self {
        let search_cache = SearchCache::new(ports.cache.clone(), search_cache_ttl_seconds);

        Self {
            create_ad: Arc::new(CreateAdUseCase::new(ports.ads.clone())),
            get_ad: Arc::new(GetAdUseCase::new(ports.ads.clone())),
            get_ads: Arc::new(GetAdsUseCase::new(ports.ads.clone())),
            update_ad: Arc::new(UpdateAdUseCase::new(
                ports.ads.clone(),
                search_cache.clone(),
            )),
            publish_ad: Arc::new(PublishAdUseCase::new(
                ports.ads.clone(),
                search_cache.clone(),
            )),
            mark_ad_as_sold: Arc::new(MarkAdAsSoldUseCase::new(
                ports.ads.clone(),
                search_cache.clone(),
            )),
            search_ads: Arc::new(SearchAdsUseCase::new(ports.search.clone(), search_cache)),
            send_message: Arc::new(SendMessageUseCase::new(
                ports.messaging.clone(),
                ports.ads.clone(),
            )),
            get_conversations: Arc::new(GetConversationsUseCase::new(ports.messaging.clone())),
            get_conversation_messages: Arc::new(GetConversationMessagesUseCase::new(
                ports.messaging.clone(),
            )),
            register_user: Arc::new(RegisterUserUseCase::new(
                ports.users.clone(),
                ports.encryption.clone(),
            )),
            login: Arc::new(LoginUseCase::new(
                ports.users.clone(),
                ports.encryption.clone(),
                ports.tokens.clone(),
                ports.cache.clone(),
                session_ttl_seconds,
            )),
            authenticate: Arc::new(AuthenticateUseCase::new(ports.tokens.clone())),
            cache: ports.cache,
            db,
        }
    }
}
