//! Bearer token authentication.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::UserRole;
use crate::domain::security::{TokenKind, TokenService};
use crate::error::AppError;

/// Identity of an authenticated caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

pub struct AuthenticateUseCase {
    tokens: Arc<dyn TokenService>,
}

impl AuthenticateUseCase {
    pub fn new(tokens: Arc<dyn TokenService>) -> Self {
        Self { tokens }
    }

    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for expired, forged or refresh tokens.
    pub fn execute(&self, bearer: &str) -> Result<AuthUser, AppError> {
        let claims = self.tokens.verify(bearer)?;

        if claims.typ != TokenKind::Access {
            return Err(AppError::unauthorized(
                "Invalid token",
                serde_json::json!({ "reason": "refresh token used as access token" }),
            ));
        }

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::security::{MockTokenService, TokenClaims, TokenError};

    fn claims(typ: TokenKind) -> TokenClaims {
        TokenClaims {
            sub: Uuid::new_v4(),
            email: "jean@example.com".to_string(),
            role: UserRole::User,
            typ,
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn test_access_token_yields_identity() {
        let expected = claims(TokenKind::Access);
        let sub = expected.sub;
        let mut tokens = MockTokenService::new();
        tokens
            .expect_verify()
            .withf(|token| token == "good")
            .times(1)
            .returning(move |_| Ok(expected.clone()));

        let user = AuthenticateUseCase::new(Arc::new(tokens))
            .execute("good")
            .unwrap();
        assert_eq!(user.user_id, sub);
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn test_refresh_token_is_rejected() {
        let mut tokens = MockTokenService::new();
        tokens
            .expect_verify()
            .returning(|_| Ok(claims(TokenKind::Refresh)));

        let err = AuthenticateUseCase::new(Arc::new(tokens))
            .execute("refresh")
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_expired_token() {
        let mut tokens = MockTokenService::new();
        tokens
            .expect_verify()
            .returning(|_| Err(TokenError::Expired));

        let err = AuthenticateUseCase::new(Arc::new(tokens))
            .execute("old")
            .unwrap_err();
        assert_eq!(err.message(), "Token expired");
    }
}
