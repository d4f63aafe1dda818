//! API route configuration.
//!
//! Routes are split by access: [`public_routes`] need no credentials,
//! [`protected_routes`] go through [`crate::api::middleware::auth`].

use crate::api::handlers::{
    conversation_messages_handler, conversations_handler, create_ad_handler, get_ad_handler,
    list_ads_handler, login_handler, mark_ad_as_sold_handler, publish_ad_handler,
    register_handler, search_handler, send_message_handler, update_ad_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

/// # Endpoints
///
/// - `POST /auth/register` - Create an account
/// - `POST /auth/login`    - Obtain access and refresh tokens
/// - `GET  /ads`           - List ads (published by default)
/// - `GET  /ads/{id}`      - Fetch one ad
/// - `GET  /search`        - Full-text search over published ads
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/ads", get(list_ads_handler))
        .route("/ads/{id}", get(get_ad_handler))
        .route("/search", get(search_handler))
}

/// # Endpoints
///
/// - `POST  /ads`                          - Create a draft ad
/// - `PATCH /ads/{id}`                     - Update an ad
/// - `PATCH /ads/{id}/publish`             - Publish a draft
/// - `PATCH /ads/{id}/sold`                - Mark a published ad as sold
/// - `POST  /messages`                     - Send a message
/// - `GET   /conversations`                - The caller's conversations
/// - `GET   /conversations/{id}/messages`  - Messages of one conversation
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/ads", post(create_ad_handler))
        .route("/ads/{id}", patch(update_ad_handler))
        .route("/ads/{id}/publish", patch(publish_ad_handler))
        .route("/ads/{id}/sold", patch(mark_ad_as_sold_handler))
        .route("/messages", post(send_message_handler))
        .route("/conversations", get(conversations_handler))
        .route(
            "/conversations/{id}/messages",
            get(conversation_messages_handler),
        )
}
