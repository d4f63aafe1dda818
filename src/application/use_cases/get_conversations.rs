//! Lists a user's conversations.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Conversation;
use crate::domain::repositories::MessagingRepository;
use crate::error::AppError;

pub struct GetConversationsUseCase {
    messaging: Arc<dyn MessagingRepository>,
}

impl GetConversationsUseCase {
    pub fn new(messaging: Arc<dyn MessagingRepository>) -> Self {
        Self { messaging }
    }

    /// Conversations where the user is buyer or seller, most recent activity first.
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Conversation>, AppError> {
        self.messaging.find_conversations_by_user_id(user_id).await
    }
}
