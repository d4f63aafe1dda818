//! Implementations of the security ports in [`crate::domain::security`].

mod aes_encryption;
mod jwt_tokens;

pub use aes_encryption::{AesEncryptionService, KEY_LEN};
pub use jwt_tokens::JwtTokenService;
