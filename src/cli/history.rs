//! CLI command for viewing the audit log

use clap::Args;

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, args: HistoryArgs) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No history recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
