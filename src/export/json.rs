//! JSON export
//!
//! Produces the same pretty-printed array shape as the data file, so an
//! export can be dropped in as a replacement data file.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Export expenses as a pretty-printed JSON array
pub fn export_expenses_json<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut *writer, expenses)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
