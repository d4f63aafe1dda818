//! Sends a message about an ad, opening the conversation on first contact.

use std::sync::Arc;
use uuid::Uuid;

use super::load_ad;
use crate::domain::entities::{Conversation, Message};
use crate::domain::repositories::{AdRepository, MessagingRepository};
use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub ad_id: Uuid,
    pub content: String,
}

pub struct SendMessageUseCase {
    messaging: Arc<dyn MessagingRepository>,
    ads: Arc<dyn AdRepository>,
}

impl SendMessageUseCase {
    pub fn new(messaging: Arc<dyn MessagingRepository>, ads: Arc<dyn AdRepository>) -> Self {
        Self { messaging, ads }
    }

    /// Validates the content, resolves the conversation, stores the message
    /// and bumps the conversation's `last_message_at`.
    ///
    /// The ad's seller fixes the orientation of the thread: whichever party
    /// is not the seller is the buyer.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for blank or oversized content, a message to
    ///   oneself, or two parties neither of whom sells the ad
    /// - [`AppError::NotFound`] if the ad does not exist
    pub async fn execute(&self, command: SendMessageCommand) -> Result<Message, AppError> {
        Message::validate_content(&command.content)?;
        if command.sender_id == command.receiver_id {
            return Err(AppError::validation("Cannot send a message to yourself"));
        }
        let ad = load_ad(self.ads.as_ref(), command.ad_id).await?;

        let (buyer_id, seller_id) = if command.receiver_id == ad.seller_id() {
            (command.sender_id, command.receiver_id)
        } else if command.sender_id == ad.seller_id() {
            (command.receiver_id, command.sender_id)
        } else {
            return Err(AppError::validation(
                "Messages must be exchanged with the seller of the ad",
            ));
        };

        let mut conversation = self
            .resolve_conversation(command.ad_id, buyer_id, seller_id)
            .await?;

        let message = Message::create(
            conversation.id(),
            command.sender_id,
            command.receiver_id,
            command.ad_id,
            command.content,
        )?;
        self.messaging.save_message(&message).await?;

        conversation.touch();
        self.messaging.save_conversation(&conversation).await?;

        tracing::info!(
            message_id = %message.id(),
            conversation_id = %conversation.id(),
            "Message sent"
        );
        Ok(message)
    }

    /// Finds the `(ad, buyer, seller)` thread or opens it.
    async fn resolve_conversation(
        &self,
        ad_id: Uuid,
        buyer_id: Uuid,
        seller_id: Uuid,
    ) -> Result<Conversation, AppError> {
        if let Some(existing) = self
            .messaging
            .find_conversation_by_participants(ad_id, buyer_id, seller_id)
            .await?
        {
            return Ok(existing);
        }

        let conversation = Conversation::create(ad_id, buyer_id, seller_id);
        match self.messaging.save_conversation(&conversation).await {
            Ok(()) => {
                tracing::info!(
                    conversation_id = %conversation.id(),
                    ad_id = %ad_id,
                    "Conversation created"
                );
                Ok(conversation)
            }
            // A concurrent sender opened the same thread first.
            Err(AppError::Conflict { .. }) => self
                .messaging
                .find_conversation_by_participants(ad_id, buyer_id, seller_id)
                .await?
                .ok_or_else(|| {
                    AppError::internal(
                        "Conversation vanished after conflict",
                        serde_json::json!({ "ad_id": ad_id }),
                    )
                }),
            Err(e) => Err(e),
        }
    }
}
