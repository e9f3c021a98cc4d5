//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use history::{handle_history_command, HistoryArgs};

use crate::error::ExpenseResult;
use crate::storage::LoadStatus;

/// Tell the user when loading had to discard a corrupt data file
pub fn report_load_status(status: &LoadStatus) {
    if status.was_reset() {
        eprintln!("Warning: data file is corrupt and has been reset.");
    }
}

/// Print user errors and swallow them; pass everything else through
///
/// Invalid input and unknown ids are normal outcomes for a command-line
/// tool: they are printed to standard output and the process exits normally.
pub fn report_user_errors(result: ExpenseResult<()>) -> ExpenseResult<()> {
    match result {
        Err(e) if e.is_user_error() => {
            println!("Error: {}", e);
            Ok(())
        }
        other => other,
    }
}
