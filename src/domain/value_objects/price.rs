//! Price value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Highest accepted asking price, inclusive.
pub const MAX_PRICE_AMOUNT: f64 = 1_000_000.0;

/// Currencies an ad may be priced in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }
}

impl FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            _ => Err(AppError::validation("Invalid currency")),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An asking price. Compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price {
    amount: f64,
    currency: Currency,
}

impl Price {
    /// Creates a price from a raw amount and currency code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the amount is negative, above
    /// [`MAX_PRICE_AMOUNT`], not a finite number, or the currency is not one
    /// of `EUR`, `USD`, `GBP`.
    pub fn create(amount: f64, currency: &str) -> Result<Self, AppError> {
        let currency = currency.parse::<Currency>()?;
        Self::new(amount, currency)
    }

    /// Creates a price from an already-parsed currency.
    pub fn new(amount: f64, currency: Currency) -> Result<Self, AppError> {
        if !amount.is_finite() {
            return Err(AppError::validation("Price amount must be a number"));
        }
        if amount < 0.0 {
            return Err(AppError::validation("Price amount cannot be negative"));
        }
        if amount > MAX_PRICE_AMOUNT {
            return Err(AppError::validation("Price amount cannot exceed 1,000,000"));
        }

        Ok(Self { amount, currency })
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
