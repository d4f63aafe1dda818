//! User entity.
//!
//! `User` deliberately does not implement `Serialize`: the password hash must
//! never reach a response body. The API layer maps users into DTOs instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::value_objects::Email;
use crate::error::AppError;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(UserRole::User),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(AppError::validation("Invalid user role")),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for [`User::create`]. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
}

/// Stored state of a user, with PII already decrypted.
#[derive(Debug, Clone)]
pub struct UserParts {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Uuid,
    email: Email,
    password_hash: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either name is out of bounds.
    pub fn create(new_user: NewUser) -> Result<Self, AppError> {
        validate_name(&new_user.first_name, "First name")?;
        validate_name(&new_user.last_name, "Last name")?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            phone: new_user.phone.filter(|p| !p.trim().is_empty()),
            role: new_user.role,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(parts: UserParts) -> Self {
        Self {
            id: parts.id,
            email: parts.email,
            password_hash: parts.password_hash,
            first_name: parts.first_name,
            last_name: parts.last_name,
            phone: parts.phone,
            role: parts.role,
            created_at: parts.created_at,
            updated_at: parts.updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn validate_name(name: &str, field: &str) -> Result<(), AppError> {
    if name.trim().chars().count() < NAME_MIN_LEN {
        return Err(AppError::validation(format!(
            "{field} must be at least 2 characters"
        )));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::validation(format!(
            "{field} cannot exceed 50 characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user() -> NewUser {
        NewUser {
            email: Email::create("jean@example.com").unwrap(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: "Jean".to_string(),
            last_name: "Dupont".to_string(),
            phone: None,
            role: UserRole::default(),
        }
    }

    #[test]
    fn test_create_defaults_to_user_role() {
        let user = User::create(new_user()).unwrap();
        assert_eq!(user.role(), UserRole::User);
        assert!(!user.is_admin());
        assert_eq!(user.first_name(), "Jean");
    }

    #[test]
    fn test_rejects_short_names() {
        let mut input = new_user();
        input.first_name = " J ".to_string();
        assert_eq!(
            User::create(input).unwrap_err().message(),
            "First name must be at least 2 characters"
        );

        let mut input = new_user();
        input.last_name = "D".to_string();
        assert_eq!(
            User::create(input).unwrap_err().message(),
            "Last name must be at least 2 characters"
        );
    }

    #[test]
    fn test_rejects_long_names() {
        let mut input = new_user();
        input.last_name = "x".repeat(51);
        assert_eq!(
            User::create(input).unwrap_err().message(),
            "Last name cannot exceed 50 characters"
        );
    }

    #[test]
    fn test_blank_phone_is_dropped() {
        let mut input = new_user();
        input.phone = Some("  ".to_string());
        assert!(User::create(input).unwrap().phone().is_none());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("ADMIN".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("root".parse::<UserRole>().is_err());
    }
}
