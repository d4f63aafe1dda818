//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{User, UserParts};
use crate::domain::repositories::UserRepository;
use crate::domain::security::EncryptionService;
use crate::domain::value_objects::Email;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    first_name_encrypted: String,
    last_name_encrypted: String,
    phone_encrypted: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// PostgreSQL repository for users.
///
/// First name, last name and phone only ever reach the database as AES-GCM
/// ciphertext produced by the injected [`EncryptionService`].
pub struct PgUserRepository {
    pool: Arc<PgPool>,
    encryption: Arc<dyn EncryptionService>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>, encryption: Arc<dyn EncryptionService>) -> Self {
        Self { pool, encryption }
    }

    fn into_user(&self, row: UserRow) -> Result<User, AppError> {
        let corrupt = |reason: String| {
            AppError::internal("Corrupt user row", json!({ "id": row.id, "reason": reason }))
        };

        let email = Email::create(&row.email).map_err(|e| corrupt(e.message().to_string()))?;
        let role = row.role.parse().map_err(|e: AppError| corrupt(e.message().to_string()))?;
        let first_name = self.encryption.decrypt(&row.first_name_encrypted)?;
        let last_name = self.encryption.decrypt(&row.last_name_encrypted)?;
        let phone = row
            .phone_encrypted
            .as_deref()
            .map(|p| self.encryption.decrypt(p))
            .transpose()?;

        Ok(User::restore(UserParts {
            id: row.id,
            email,
            password_hash: row.password_hash,
            first_name,
            last_name,
            phone,
            role,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: &User) -> Result<(), AppError> {
        let first_name = self.encryption.encrypt(user.first_name())?;
        let last_name = self.encryption.encrypt(user.last_name())?;
        let phone = user
            .phone()
            .map(|p| self.encryption.encrypt(p))
            .transpose()?;

        sqlx::query(
            r#"
            INSERT INTO users (
                id, email, password_hash, first_name_encrypted, last_name_encrypted,
                phone_encrypted, role, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                email = EXCLUDED.email,
                password_hash = EXCLUDED.password_hash,
                first_name_encrypted = EXCLUDED.first_name_encrypted,
                last_name_encrypted = EXCLUDED.last_name_encrypted,
                phone_encrypted = EXCLUDED.phone_encrypted,
                role = EXCLUDED.role,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.id())
        .bind(user.email().as_str())
        .bind(user.password_hash())
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .bind(user.role().as_str())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| self.into_user(r)).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(|r| self.into_user(r)).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
