//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime queries against the schema in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgAdRepository`] - ad aggregates with versioned upserts
//! - [`PgSearchRepository`] - full-text search over published ads
//! - [`PgMessagingRepository`] - conversations and messages
//! - [`PgUserRepository`] - users with encrypted PII

pub mod pg_ad_repository;
pub mod pg_messaging_repository;
pub mod pg_search_repository;
pub mod pg_user_repository;

pub use pg_ad_repository::PgAdRepository;
pub use pg_messaging_repository::PgMessagingRepository;
pub use pg_search_repository::PgSearchRepository;
pub use pg_user_repository::PgUserRepository;
