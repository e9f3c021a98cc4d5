//! Strongly-typed expense identifier
//!
//! Ids are positive integers assigned as one more than the largest id in the
//! collection. They are never reused while a higher id still exists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Identifier of an [`Expense`](super::Expense)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id handed to the first expense of an empty collection
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an id from a raw value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once ids are exhausted
    pub const fn next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Next id for a collection whose ids are `existing`
    ///
    /// # Errors
    ///
    /// Fails if the largest existing id is already `u64::MAX`.
    pub fn next_after<I>(existing: I) -> Result<Self, ExpenseError>
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        match existing.into_iter().max() {
            None => Ok(Self::FIRST),
            Some(max) => max
                .next()
                .ok_or_else(|| ExpenseError::Storage("No expense ids left".into())),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-supplied id, parsed but not yet resolved against the collection
///
/// Any integer is accepted here; zero and negative values simply never match
/// an existing expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdArg(i64);

impl IdArg {
    /// The id this argument refers to, if it can name one at all
    pub fn as_expense_id(&self) -> Option<ExpenseId> {
        u64::try_from(self.0).ok().filter(|v| *v > 0).map(ExpenseId)
    }
}

impl fmt::Display for IdArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IdArg {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ExpenseError::invalid_id())
    }
}
