//! Email address value object.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A normalized (trimmed, lower-cased) email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the address is empty or malformed.
    pub fn create(raw: &str) -> Result<Self, AppError> {
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(AppError::validation("Invalid email format"));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
