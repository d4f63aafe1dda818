//! Repository trait for users.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::Email;
use crate::error::AppError;

/// Storage contract for [`User`]s.
///
/// Implementations must never persist first name, last name or phone in
/// plaintext: they are encrypted on write and decrypted on read.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Upserts a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email belongs to another user.
    async fn save(&self, user: &User) -> Result<(), AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError>;

    /// Returns `Ok(false)` if no such user existed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
