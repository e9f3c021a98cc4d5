//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes, corruption recovery and
//! audit logging of every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, LoadStatus};
pub use file_io::{read_bytes, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Expense;

/// Explicit store handle passed to every command handler
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, ensuring its directories exist
    pub fn new(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.data_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<LoadStatus, ExpenseError> {
        self.expenses.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save()
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record an added expense
    pub fn log_create(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.audit.log(&AuditEntry::create(expense))
    }

    /// Record an updated expense
    pub fn log_update(&self, before: &Expense, after: &Expense) -> Result<(), ExpenseError> {
        self.audit.log(&AuditEntry::update(before, after))
    }

    /// Record a deleted expense
    pub fn log_delete(&self, expense: &Expense) -> Result<(), ExpenseError> {
        self.audit.log(&AuditEntry::delete(expense))
    }
}
