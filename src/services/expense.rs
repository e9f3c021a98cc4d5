//! Expense service
//!
//! Business logic for the five expense operations: input validation,
//! id assignment, persistence and audit logging.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense, ExpenseId, IdArg};
use crate::storage::Storage;

/// Result of a summary query
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Month filter that was applied, if any
    pub month: Option<u32>,
    /// Sum of matching amounts
    pub total: Amount,
    /// Number of expenses that matched
    pub count: usize,
}

/// Parse a month number given on the command line (1-12)
pub fn parse_month(input: &str) -> ExpenseResult<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(ExpenseError::invalid_month)
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new expense dated today
    pub fn add(&self, description: &str, amount: &str) -> ExpenseResult<Expense> {
        Expense::validate_description(description)?;
        let amount = Amount::parse(amount)?;

        let id = self.storage.expenses.next_id()?;
        let expense = Expense::new(id, description, amount);

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;
        self.record_audit(self.storage.log_create(&expense));

        Ok(expense)
    }

    /// List all expenses in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Delete an expense by id
    pub fn delete(&self, id: &str) -> ExpenseResult<Expense> {
        let arg: IdArg = id.parse()?;
        let expense_id = self.resolve(arg)?.id;

        let removed = self
            .storage
            .expenses
            .delete(expense_id)?
            .ok_or_else(|| ExpenseError::expense_not_found(arg))?;

        self.storage.expenses.save()?;
        self.record_audit(self.storage.log_delete(&removed));

        Ok(removed)
    }

    /// Update the description and/or amount of an expense
    ///
    /// Every supplied field is validated before anything changes, description
    /// first. The date is never touched. Supplying neither field is allowed
    /// and leaves the record as it was.
    pub fn update(
        &self,
        id: &str,
        description: Option<&str>,
        amount: Option<&str>,
    ) -> ExpenseResult<Expense> {
        let arg: IdArg = id.parse()?;
        let before = self.resolve(arg)?;

        if let Some(description) = description {
            Expense::validate_description(description)?;
        }
        let amount = amount.map(Amount::parse).transpose()?;

        let mut after = before.clone();
        if let Some(description) = description {
            after.description = description.to_string();
        }
        if let Some(amount) = amount {
            after.amount = amount;
        }

        self.storage
            .expenses
            .replace(after.clone())?
            .ok_or_else(|| ExpenseError::expense_not_found(arg))?;
        self.storage.expenses.save()?;

        if before != after {
            self.record_audit(self.storage.log_update(&before, &after));
        }

        Ok(after)
    }

    /// The data file is already saved when this runs, so a failed audit
    /// append must not turn the mutation into an error.
    fn record_audit(&self, result: ExpenseResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write audit entry");
        }
    }

    /// Total of all expenses, or of those recorded in a given calendar month
    ///
    /// The month filter ignores the year: March 2023 and March 2024 both
    /// count towards month 3.
    pub fn summary(&self, month: Option<&str>) -> ExpenseResult<Summary> {
        let month = month.map(parse_month).transpose()?;

        let expenses = self.storage.expenses.get_all()?;
        let matching: Vec<&Expense> = expenses
            .iter()
            .filter(|e| month.map_or(true, |m| e.month() == m))
            .collect();

        Ok(Summary {
            month,
            total: matching.iter().map(|e| e.amount).sum(),
            count: matching.len(),
        })
    }

    fn resolve(&self, arg: IdArg) -> ExpenseResult<Expense> {
        let found = match arg.as_expense_id() {
            Some(id) => self.get(id)?,
            None => None,
        };
        found.ok_or_else(|| ExpenseError::expense_not_found(arg))
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }
}
