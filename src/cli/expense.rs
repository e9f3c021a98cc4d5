//! Expense CLI commands
//!
//! The five expense operations. Every value is taken as a string so that
//! malformed input is reported with the tracker's own messages instead of
//! clap's usage errors.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_table, format_summary};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Amount of the expense
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// List all expenses
    List,
    /// Delete an expense by ID
    Delete {
        /// Expense ID
        #[arg(long, allow_hyphen_values = true)]
        id: String,
    },
    /// Update an expense by ID
    Update {
        /// Expense ID
        #[arg(long, allow_hyphen_values = true)]
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Show total expenses or for a specific month
    Summary {
        /// Month number (1-12)
        #[arg(long, allow_hyphen_values = true)]
        month: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => {
            let expense = service.add(&description, &amount)?;
            println!("Expense added successfully (ID: {})", expense.id);
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            println!("{}", format_expense_table(&expenses, settings));
        }

        ExpenseCommands::Delete { id } => {
            service.delete(&id)?;
            println!("Expense deleted successfully");
        }

        ExpenseCommands::Update {
            id,
            description,
            amount,
        } => {
            let expense = service.update(&id, description.as_deref(), amount.as_deref())?;
            println!("Expense updated successfully (ID: {})", expense.id);
        }

        ExpenseCommands::Summary { month } => {
            let summary = service.summary(month.as_deref())?;
            println!("{}", format_summary(&summary, &settings.currency_symbol));
        }
    }

    Ok(())
}
