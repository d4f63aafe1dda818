//! Location value object.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::AppError;

static POSTAL_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}$").unwrap());

pub const DEFAULT_COUNTRY: &str = "France";

/// Where an item is located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    city: String,
    postal_code: String,
    country: String,
}

impl Location {
    /// Creates a location, defaulting the country to France.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the city is blank or the postal
    /// code is not exactly five digits.
    pub fn create(city: &str, postal_code: &str, country: Option<&str>) -> Result<Self, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::validation("City is required"));
        }
        if !POSTAL_CODE_REGEX.is_match(postal_code) {
            return Err(AppError::validation("Invalid postal code format"));
        }

        let country = country
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COUNTRY);

        Ok(Self {
            city: city.to_string(),
            postal_code: postal_code.to_string(),
            country: country.to_string(),
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.postal_code, self.country)
    }
}
