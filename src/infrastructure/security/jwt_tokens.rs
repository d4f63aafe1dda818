//! HS256 JWT issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use crate::domain::security::{TokenClaims, TokenError, TokenKind, TokenService, TokenSubject};

pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &str, access_ttl_seconds: u64, refresh_ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: ttl(access_ttl_seconds),
            refresh_ttl: ttl(refresh_ttl_seconds),
        }
    }

    fn issue(&self, subject: &TokenSubject, kind: TokenKind) -> Result<String, TokenError> {
        let now = Utc::now();
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };

        let claims = TokenClaims {
            sub: subject.user_id,
            email: subject.email.clone(),
            role: subject.role,
            typ: kind,
            iat: now.timestamp(),
            exp: now
                .checked_add_signed(ttl)
                .ok_or_else(|| TokenError::Signing("token lifetime out of range".to_string()))?
                .timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

/// Saturates instead of overflowing; out-of-range lifetimes then fail at
/// issue time.
fn ttl(seconds: u64) -> Duration {
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

impl TokenService for JwtTokenService {
    fn generate_access_token(&self, subject: &TokenSubject) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Access)
    }

    fn generate_refresh_token(&self, subject: &TokenSubject) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Refresh)
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
