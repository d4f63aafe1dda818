//! Repository ports for the domain layer.
//!
//! Traits define storage-agnostic contracts; implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated with `mockall`
//! for unit tests.
//!
//! - [`AdRepository`] - ad aggregate load and save
//! - [`SearchRepository`] - filtered search over published ads
//! - [`MessagingRepository`] - conversations and messages
//! - [`UserRepository`] - user accounts with encrypted PII

pub mod ad_repository;
pub mod messaging_repository;
pub mod search_repository;
pub mod user_repository;

pub use ad_repository::AdRepository;
pub use messaging_repository::MessagingRepository;
pub use search_repository::SearchRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use ad_repository::MockAdRepository;
#[cfg(test)]
pub use messaging_repository::MockMessagingRepository;
#[cfg(test)]
pub use search_repository::MockSearchRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
