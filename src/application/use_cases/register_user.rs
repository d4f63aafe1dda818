//! Account registration.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserRole};
use crate::domain::repositories::UserRepository;
use crate::domain::security::EncryptionService;
use crate::domain::value_objects::Email;
use crate::error::AppError;

pub const PASSWORD_MIN_LEN: usize = 8;

const DUPLICATE_EMAIL: &str = "User with this email already exists";

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

pub struct RegisterUserUseCase {
    users: Arc<dyn UserRepository>,
    encryption: Arc<dyn EncryptionService>,
}

impl RegisterUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>, encryption: Arc<dyn EncryptionService>) -> Self {
        Self { users, encryption }
    }

    /// Registers a `USER` account.
    ///
    /// Checks run in order: password policy, email format, uniqueness. The
    /// password is hashed only once every check passed.
    pub async fn execute(&self, command: RegisterUserCommand) -> Result<User, AppError> {
        self.register(command, UserRole::User).await
    }

    /// Same flow with an explicit role. Only the admin CLI grants `ADMIN`.
    pub async fn register(
        &self,
        command: RegisterUserCommand,
        role: UserRole,
    ) -> Result<User, AppError> {
        validate_password(&command.password)?;
        let email = Email::create(&command.email)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation(DUPLICATE_EMAIL));
        }

        let password_hash = self.encryption.hash_password(&command.password).await?;

        let user = User::create(NewUser {
            email,
            password_hash,
            first_name: command.first_name,
            last_name: command.last_name,
            phone: command.phone,
            role,
        })?;

        match self.users.save(&user).await {
            Ok(()) => {}
            // Lost a race against a concurrent registration.
            Err(AppError::Conflict { .. }) => return Err(AppError::validation(DUPLICATE_EMAIL)),
            Err(e) => return Err(e),
        }

        tracing::info!(user_id = %user.id(), role = %user.role(), "User registered");
        Ok(user)
    }
}

/// # Errors
///
/// Returns the first failing rule: length, then uppercase, lowercase, digit.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(AppError::validation(
            "Password must be at least 8 characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::validation(
            "Password must contain at least one uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(AppError::validation(
            "Password must contain at least one lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "Password must contain at least one number",
        ));
    }
    Ok(())
}
