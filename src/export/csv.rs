//! CSV export
//!
//! Writes one row per expense under an `id,date,description,amount` header.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

const HEADER: [&str; 4] = ["id", "date", "description", "amount"];

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Header written explicitly so an empty export still has one
    csv_writer
        .write_record(HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .serialize(expense)
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
