//! Repository trait for conversations and messages.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Conversation, Message};
use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingRepository: Send + Sync {
    /// Upserts a conversation by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if another conversation already owns the
    /// same `(ad_id, buyer_id, seller_id)` triple.
    async fn save_conversation(&self, conversation: &Conversation) -> Result<(), AppError>;

    async fn save_message(&self, message: &Message) -> Result<(), AppError>;

    async fn find_conversation_by_participants(
        &self,
        ad_id: Uuid,
        buyer_id: Uuid,
        seller_id: Uuid,
    ) -> Result<Option<Conversation>, AppError>;

    async fn find_conversation_by_id(&self, id: Uuid) -> Result<Option<Conversation>, AppError>;

    /// Conversations where the user is buyer or seller, most recent activity first.
    async fn find_conversations_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Conversation>, AppError>;

    /// Messages of a conversation, oldest first.
    async fn find_messages_by_conversation_id(
        &self,
        conversation_id: Uuid,
    ) -> Result<Vec<Message>, AppError>;
}
