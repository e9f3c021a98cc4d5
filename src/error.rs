//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input. The message is shown verbatim.
    #[error("{0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} with ID {identifier} not found.")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ExpenseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.to_string(),
        }
    }

    /// Blank description
    pub fn empty_description() -> Self {
        Self::Validation("Description cannot be empty.".into())
    }

    /// Non-numeric, non-finite or non-positive amount
    pub fn invalid_amount() -> Self {
        Self::Validation("Amount must be a positive number.".into())
    }

    /// Non-integer id
    pub fn invalid_id() -> Self {
        Self::Validation("ID must be a number.".into())
    }

    /// Month outside 1..=12 or non-integer
    pub fn invalid_month() -> Self {
        Self::Validation("Month must be between 1 and 12.".into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Errors caused by user input rather than the environment.
    ///
    /// These are reported to the user and the process still exits normally.
    pub fn is_user_error(&self) -> bool {
        self.is_validation() || self.is_not_found()
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
