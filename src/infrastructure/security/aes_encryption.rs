//! AES-256-GCM encryption and Argon2id password hashing.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use async_trait::async_trait;

use crate::domain::security::{CryptoError, EncryptionService};

pub const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const SALT_LEN: usize = 16;

/// Ciphertexts are `hex(nonce):hex(ciphertext || tag)` with a fresh random
/// 96-bit nonce per call, so encrypting the same value twice gives different
/// output.
pub struct AesEncryptionService {
    cipher: Aes256Gcm,
}

impl AesEncryptionService {
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidKey`] unless the key is exactly 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != KEY_LEN {
            return Err(CryptoError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_LEN,
                key.len()
            )));
        }

        let cipher =
            Aes256Gcm::new_from_slice(key).map_err(|e| CryptoError::InvalidKey(e.to_string()))?;
        Ok(Self { cipher })
    }
}

fn random_bytes<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut buffer = [0u8; N];
    getrandom::fill(&mut buffer).map_err(|e| CryptoError::Hash(e.to_string()))?;
    Ok(buffer)
}

#[async_trait]
impl EncryptionService for AesEncryptionService {
    fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        let nonce_bytes = random_bytes::<NONCE_LEN>().map_err(|_| CryptoError::Encrypt)?;
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CryptoError::Encrypt)?;

        Ok(format!("{}:{}", hex::encode(nonce_bytes), hex::encode(ciphertext)))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CryptoError> {
        let (nonce_hex, body_hex) = ciphertext.split_once(':').ok_or(CryptoError::Malformed)?;

        let nonce_bytes = hex::decode(nonce_hex).map_err(|_| CryptoError::Malformed)?;
        if nonce_bytes.len() != NONCE_LEN {
            return Err(CryptoError::Malformed);
        }
        let body = hex::decode(body_hex).map_err(|_| CryptoError::Malformed)?;

        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(&nonce_bytes), body.as_ref())
            .map_err(|_| CryptoError::Decrypt)?;

        String::from_utf8(plaintext).map_err(|_| CryptoError::Malformed)
    }

    async fn hash_password(&self, password: &str) -> Result<String, CryptoError> {
        let password = password.to_string();
        let salt_bytes = random_bytes::<SALT_LEN>()?;

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::encode_b64(&salt_bytes)
                .map_err(|e| CryptoError::Hash(e.to_string()))?;
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| CryptoError::Hash(e.to_string()))
        })
        .await
        .map_err(|e| CryptoError::Hash(e.to_string()))?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CryptoError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&hash).map_err(|e| CryptoError::Hash(e.to_string()))?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| CryptoError::Hash(e.to_string()))?
    }
}
