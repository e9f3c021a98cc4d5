//! YAML export
//!
//! Human-readable export of the collection as a YAML sequence.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export expenses as a YAML sequence
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    writeln!(writer, "# Expense export ({} expenses)", expenses.len())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, expenses).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
