//! Expense model
//!
//! The single record type of the tracker: an id, the calendar date it was
//! recorded on, a description and a positive amount.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::ExpenseId;
use crate::error::ExpenseError;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier within the collection
    pub id: ExpenseId,

    /// Day the expense was recorded; never changed after creation
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// How much was spent
    pub amount: Amount,
}

impl Expense {
    /// Create an expense dated today
    pub fn new(id: ExpenseId, description: impl Into<String>, amount: Amount) -> Self {
        Self::with_date(id, Local::now().date_naive(), description, amount)
    }

    /// Create an expense with an explicit date
    pub fn with_date(
        id: ExpenseId,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Amount,
    ) -> Self {
        Self {
            id,
            date,
            description: description.into(),
            amount,
        }
    }

    /// Calendar month of the expense date (1-12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Validate a user-supplied description
    ///
    /// The description is stored as typed; only the emptiness check trims.
    pub fn validate_description(description: &str) -> Result<(), ExpenseError> {
        if description.trim().is_empty() {
            return Err(ExpenseError::empty_description());
        }
        Ok(())
    }
}
