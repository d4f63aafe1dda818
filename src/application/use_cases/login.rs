//! Credential login and session bookkeeping.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::UserRole;
use crate::domain::repositories::UserRepository;
use crate::domain::security::{EncryptionService, TokenService, TokenSubject};
use crate::domain::value_objects::Email;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginResult {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
}

/// Value stored under `session:{user_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Session<'a> {
    refresh_token: &'a str,
    created_at: DateTime<Utc>,
}

pub fn session_key(user_id: Uuid) -> String {
    format!("session:{user_id}")
}

pub struct LoginUseCase {
    users: Arc<dyn UserRepository>,
    encryption: Arc<dyn EncryptionService>,
    tokens: Arc<dyn TokenService>,
    sessions: Arc<dyn CacheService>,
    session_ttl_seconds: u64,
}

impl LoginUseCase {
    pub fn new(
        users: Arc<dyn UserRepository>,
        encryption: Arc<dyn EncryptionService>,
        tokens: Arc<dyn TokenService>,
        sessions: Arc<dyn CacheService>,
        session_ttl_seconds: u64,
    ) -> Self {
        Self {
            users,
            encryption,
            tokens,
            sessions,
            session_ttl_seconds,
        }
    }

    /// Checks the credentials, issues an access/refresh token pair and
    /// records the session.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] with one message whether the email is
    ///   unknown or the password is wrong
    /// - [`AppError::Internal`] if the session cannot be recorded
    pub async fn execute(&self, command: LoginCommand) -> Result<LoginResult, AppError> {
        let email = Email::create(&command.email).map_err(|_| invalid_credentials())?;

        let Some(user) = self.users.find_by_email(&email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Err(invalid_credentials());
        };

        let valid = self
            .encryption
            .verify_password(&command.password, user.password_hash())
            .await?;
        if !valid {
            tracing::debug!(user_id = %user.id(), "Login attempt with wrong password");
            return Err(invalid_credentials());
        }

        let subject = TokenSubject {
            user_id: user.id(),
            email: user.email().as_str().to_string(),
            role: user.role(),
        };
        let access_token = self.tokens.generate_access_token(&subject)?;
        let refresh_token = self.tokens.generate_refresh_token(&subject)?;

        self.store_session(user.id(), &refresh_token).await?;

        tracing::info!(user_id = %user.id(), "User logged in");
        Ok(LoginResult {
            access_token,
            refresh_token,
            user_id: subject.user_id,
            email: subject.email,
            role: subject.role,
        })
    }

    async fn store_session(&self, user_id: Uuid, refresh_token: &str) -> Result<(), AppError> {
        let session = Session {
            refresh_token,
            created_at: Utc::now(),
        };
        let raw = serde_json::to_string(&session).map_err(|e| {
            AppError::internal("Session not serializable", serde_json::json!({ "reason": e.to_string() }))
        })?;

        self.sessions
            .set(&session_key(user_id), &raw, self.session_ttl_seconds)
            .await?;
        Ok(())
    }
}

fn invalid_credentials() -> AppError {
    AppError::validation(INVALID_CREDENTIALS)
}
