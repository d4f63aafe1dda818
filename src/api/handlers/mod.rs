//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod ads;
pub mod auth;
pub mod health;
pub mod messages;
pub mod search;

pub use ads::{
    create_ad_handler, get_ad_handler, list_ads_handler, mark_ad_as_sold_handler,
    publish_ad_handler, update_ad_handler,
};
pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use messages::{conversation_messages_handler, conversations_handler, send_message_handler};
pub use search::search_handler;
