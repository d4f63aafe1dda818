//! Security ports: symmetric encryption, password hashing and token issuing.
//!
//! Implementations live in [`crate::infrastructure::security`]. Use cases only
//! see these traits, so tests can swap in the generated mocks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::UserRole;
use crate::error::AppError;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("encryption failed")]
    Encrypt,
    #[error("malformed ciphertext")]
    Malformed,
    /// Authentication tag mismatch: the ciphertext was altered or the key is wrong.
    #[error("decryption failed")]
    Decrypt,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl From<CryptoError> for AppError {
    fn from(e: CryptoError) -> Self {
        AppError::internal("Cryptographic operation failed", json!({ "reason": e.to_string() }))
    }
}

/// AEAD encryption of PII at rest, plus password hashing.
///
/// Hashing is async because implementations run the KDF off the request
/// threads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncryptionService: Send + Sync {
    fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError>;

    /// # Errors
    ///
    /// Returns [`CryptoError::Decrypt`] when the ciphertext fails authentication.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CryptoError>;

    async fn hash_password(&self, password: &str) -> Result<String, CryptoError>;

    /// Returns `Ok(false)` on mismatch; errors only on a malformed hash.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CryptoError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    pub typ: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

/// Who a token is issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSubject {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid,
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => {
                AppError::unauthorized("Token expired", json!({ "reason": "expired" }))
            }
            TokenError::Invalid => {
                AppError::unauthorized("Invalid token", json!({ "reason": "invalid" }))
            }
            TokenError::Signing(reason) => {
                AppError::internal("Token signing failed", json!({ "reason": reason }))
            }
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    fn generate_access_token(&self, subject: &TokenSubject) -> Result<String, TokenError>;

    fn generate_refresh_token(&self, subject: &TokenSubject) -> Result<String, TokenError>;

    /// Checks signature and expiry and returns the claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
