//! Validated annual income parsed from user-entered text.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use rust_decimal_macros::dec;
use thiserror::Error;

/// Income text that cannot be used for a tax calculation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("income is empty")]
    Empty,

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("income {value} is negative")]
    Negative { value: Decimal },

    #[error("income {value} exceeds the maximum of {}", Income::MAX)]
    TooLarge { value: Decimal },
}

/// A finite, non-negative annual income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Income(Decimal);

impl Income {
    pub const ZERO: Income = Income(Decimal::ZERO);

    /// Largest accepted income (10^15). Slab arithmetic at rates up to 100%
    /// stays far inside `Decimal` range below this.
    pub const MAX: Decimal = dec!(1000000000000000);

    pub fn new(value: Decimal) -> Result<Self, InvalidInputError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(InvalidInputError::Negative { value });
        }
        if value > Self::MAX {
            return Err(InvalidInputError::TooLarge { value });
        }
        Ok(Self(value))
    }

    /// Parses income as typed by a user.
    ///
    /// Surrounding whitespace is trimmed and `,`/`_` digit separators are
    /// removed, so both `1,200,000` and the Indian grouping `12,00,000` work.
    /// Scientific notation such as `1.5e6` is also accepted.
    pub fn parse(s: &str) -> Result<Self, InvalidInputError> {
        let normalized = normalize_income_input(s);
        if normalized.is_empty() {
            return Err(InvalidInputError::Empty);
        }

        let value = normalized
            .parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(&normalized))
            .map_err(|_| InvalidInputError::NotANumber {
                input: s.trim().to_string(),
            })?;

        Self::new(value)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

fn normalize_income_input(s: &str) -> String {
    s.trim().chars().filter(|c| *c != ',' && *c != '_').collect()
}

impl FromStr for Income {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Income {
    type Error = InvalidInputError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Income> for Decimal {
    fn from(income: Income) -> Self {
        income.0
    }
}

impl fmt::Display for Income {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
