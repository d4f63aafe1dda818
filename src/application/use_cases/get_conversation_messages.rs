//! Reads the messages of one conversation.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Message;
use crate::domain::repositories::MessagingRepository;
use crate::error::AppError;

pub struct GetConversationMessagesUseCase {
    messaging: Arc<dyn MessagingRepository>,
}

impl GetConversationMessagesUseCase {
    pub fn new(messaging: Arc<dyn MessagingRepository>) -> Self {
        Self { messaging }
    }

    /// Messages oldest first.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the conversation does not exist
    /// - [`AppError::Forbidden`] if `actor_id` is neither buyer nor seller
    pub async fn execute(
        &self,
        conversation_id: Uuid,
        actor_id: Uuid,
    ) -> Result<Vec<Message>, AppError> {
        let conversation = self
            .messaging
            .find_conversation_by_id(conversation_id)
            .await?
            .ok_or_else(|| AppError::resource_not_found("Conversation", conversation_id))?;

        if !conversation.involves(actor_id) {
            return Err(AppError::forbidden(
                "Not a participant of this conversation",
                serde_json::json!({ "conversation_id": conversation_id }),
            ));
        }

        self.messaging
            .find_messages_by_conversation_id(conversation_id)
            .await
    }
}
