//! Amount type for representing expense values
//!
//! Amounts are stored as plain JSON numbers, so this wraps an `f64`.
//! Values entered by the user must be finite and strictly positive;
//! sums start from [`Amount::zero`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::ExpenseError;

/// A monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting anything that isn't finite and positive
    pub fn new(value: f64) -> Result<Self, ExpenseError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ExpenseError::invalid_amount())
        }
    }

    /// A zero amount, used as the starting point of totals
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the underlying value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse a user-supplied amount
    ///
    /// Accepts anything `f64` parses ("20", "4.75", "1e3") as long as the
    /// result is finite and greater than zero.
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| ExpenseError::invalid_amount())?;
        Self::new(value)
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

/// Whole amounts print without a fractional part ("20"), others with
/// the shortest representation that round-trips ("20.5").
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
