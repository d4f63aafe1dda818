//! Message entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AppError;

pub const CONTENT_MAX_LEN: usize = 2000;

/// A single message in a conversation. Immutable apart from `is_read`.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    id: Uuid,
    conversation_id: Uuid,
    sender_id: Uuid,
    receiver_id: Uuid,
    ad_id: Uuid,
    content: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl Message {
    /// Creates an unread message.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the content is blank or longer
    /// than [`CONTENT_MAX_LEN`] characters.
    pub fn create(
        conversation_id: Uuid,
        sender_id: Uuid,
        receiver_id: Uuid,
        ad_id: Uuid,
        content: String,
    ) -> Result<Self, AppError> {
        Self::validate_content(&content)?;

        Ok(Self {
            id: Uuid::new_v4(),
            conversation_id,
            sender_id,
            receiver_id,
            ad_id,
            content,
            is_read: false,
            created_at: Utc::now(),
        })
    }

    pub fn validate_content(content: &str) -> Result<(), AppError> {
        if content.trim().is_empty() {
            return Err(AppError::validation("Message content cannot be empty"));
        }
        if content.chars().count() > CONTENT_MAX_LEN {
            return Err(AppError::validation(
                "Message content cannot exceed 2000 characters",
            ));
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        conversation_id: Uuid,
        sender_id: Uuid,
        receiver_id: Uuid,
        ad_id: Uuid,
        content: String,
        is_read: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            conversation_id,
            sender_id,
            receiver_id,
            ad_id,
            content,
            is_read,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn conversation_id(&self) -> Uuid {
        self.conversation_id
    }

    pub fn sender_id(&self) -> Uuid {
        self.sender_id
    }

    pub fn receiver_id(&self) -> Uuid {
        self.receiver_id
    }

    pub fn ad_id(&self) -> Uuid {
        self.ad_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
