//! PostgreSQL implementation of the messaging repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Conversation, Message};
use crate::domain::repositories::MessagingRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct ConversationRow {
    id: Uuid,
    ad_id: Uuid,
    buyer_id: Uuid,
    seller_id: Uuid,
    last_message_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<ConversationRow> for Conversation {
    fn from(r: ConversationRow) -> Self {
        Conversation::restore(
            r.id,
            r.ad_id,
            r.buyer_id,
            r.seller_id,
            r.last_message_at,
            r.created_at,
        )
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: Uuid,
    conversation_id: Uuid,
    sender_id: Uuid,
    receiver_id: Uuid,
    ad_id: Uuid,
    content: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(r: MessageRow) -> Self {
        Message::restore(
            r.id,
            r.conversation_id,
            r.sender_id,
            r.receiver_id,
            r.ad_id,
            r.content,
            r.is_read,
            r.created_at,
        )
    }
}

/// PostgreSQL repository for conversations and messages.
///
/// The `uq_conversations_participants` constraint makes the participant
/// triple unique; a losing concurrent insert surfaces as
/// [`AppError::Conflict`].
pub struct PgMessagingRepository {
    pool: Arc<PgPool>,
}

impl PgMessagingRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessagingRepository for PgMessagingRepository {
    async fn save_conversation(&self, conversation: &Conversation) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO conversations (id, ad_id, buyer_id, seller_id, last_message_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                last_message_at = EXCLUDED.last_message_at
            "#,
        )
        .bind(conversation.id())
        .bind(conversation.ad_id())
        .bind(conversation.buyer_id())
        .bind(conversation.seller_id())
        .bind(conversation.last_message_at())
        .bind(conversation.created_at())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn save_message(&self, message: &Message) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, conversation_id, sender_id, receiver_id, ad_id, content, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                is_read = EXCLUDED.is_read
            "#,
        )
        .bind(message.id())
        .bind(message.conversation_id())
        .bind(message.sender_id())
        .bind(message.receiver_id())
        .bind(message.ad_id())
        .bind(message.content())
        .bind(message.is_read())
        .bind(message.created_at())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_conversation_by_participants(
        &self,
        ad_id: Uuid,
        buyer_id: Uuid,
        seller_id: Uuid,
    ) -> Result<Option<Conversation>, AppError> {
        let row = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT id, ad_id, buyer_id, seller_id, last_message_at, created_at
            FROM conversations
            WHERE ad_id = $1 AND buyer_id = $2 AND seller_id = $3
            "#,
        )
        .bind(ad_id)
        .bind(buyer_id)
        .bind(seller_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Conversation::from))
    }

    async fn find_conversation_by_id(&self, id: Uuid) -> Result<Option<Conversation>, AppError> {
        let row = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT id, ad_id, buyer_id, seller_id, last_message_at, created_at
            FROM conversations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Conversation::from))
    }

    async fn find_conversations_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Conversation>, AppError> {
        let rows = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT id, ad_id, buyer_id, seller_id, last_message_at, created_at
            FROM conversations
            WHERE buyer_id = $1 OR seller_id = $1
            ORDER BY last_message_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Conversation::from).collect())
    }

    async fn find_messages_by_conversation_id(
        &self,
        conversation_id: Uuid,
    ) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, conversation_id, sender_id, receiver_id, ad_id, content, is_read, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(conversation_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
