//! Handlers for messaging endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::message::{ConversationResponse, MessageResponse, SendMessageRequest};
use crate::application::use_cases::{AuthUser, SendMessageCommand};
use crate::error::AppError;
use crate::state::AppState;

/// Sends a message about an ad. The caller is the sender.
///
/// # Endpoint
///
/// `POST /api/v1/messages`
///
/// ```json
/// { "receiverId": "…", "adId": "…", "content": "Is it still available?" }
/// ```
pub async fn send_message_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    payload.validate()?;

    let message = state
        .send_message
        .execute(SendMessageCommand {
            sender_id: user.user_id,
            receiver_id: payload.receiver_id,
            ad_id: payload.ad_id,
            content: payload.content,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(&message))))
}

/// `GET /api/v1/conversations`, newest activity first.
pub async fn conversations_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<ConversationResponse>>, AppError> {
    let conversations = state.get_conversations.execute(user.user_id).await?;
    Ok(Json(
        conversations.iter().map(ConversationResponse::from).collect(),
    ))
}

/// `GET /api/v1/conversations/{id}/messages`, oldest first.
///
/// # Errors
///
/// Returns 403 Forbidden unless the caller is buyer or seller.
pub async fn conversation_messages_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state
        .get_conversation_messages
        .execute(id, user.user_id)
        .await?;
    Ok(Json(messages.iter().map(MessageResponse::from).collect()))
}
