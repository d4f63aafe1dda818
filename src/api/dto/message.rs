//! DTOs for messaging endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Conversation, Message};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    pub ad_id: Uuid,

    #[validate(length(min = 1, message = "Message content cannot be empty"))]
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for MessageResponse {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id(),
            conversation_id: m.conversation_id(),
            sender_id: m.sender_id(),
            receiver_id: m.receiver_id(),
            content: m.content().to_string(),
            is_read: m.is_read(),
            created_at: m.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    pub id: Uuid,
    pub ad_id: Uuid,
    pub buyer_id: Uuid,
    pub seller_id: Uuid,
    pub last_message_at: DateTime<Utc>,
}

impl From<&Conversation> for ConversationResponse {
    fn from(c: &Conversation) -> Self {
        Self {
            id: c.id(),
            ad_id: c.ad_id(),
            buyer_id: c.buyer_id(),
            seller_id: c.seller_id(),
            last_message_at: c.last_message_at(),
        }
    }
}
