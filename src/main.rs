use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_cli::cli::{
    handle_expense_command, handle_export_command, handle_history_command, report_load_status,
    report_user_errors, ExpenseCommands, ExportArgs, HistoryArgs,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Track personal expenses from the command line. Expenses are kept \
                  in a single JSON file that is read and rewritten by each command."
)]
struct Cli {
    /// Path of the expense data file
    #[arg(long, global = true, env = "EXPENSE_CLI_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export all expenses to a file
    Export(ExportArgs),

    /// Show recent changes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config {
        /// Write the default settings file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut paths = ExpensePaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_data_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;
    let mut storage = Storage::new(paths.clone())?;

    match cli.command {
        Commands::Expense(cmd) => {
            report_load_status(&storage.load_all()?);
            report_user_errors(handle_expense_command(&storage, &settings, cmd))?;
        }
        Commands::Export(args) => {
            report_load_status(&storage.load_all()?);
            handle_export_command(&storage, args)?;
        }
        Commands::History(args) => {
            handle_history_command(&storage, args)?;
        }
        Commands::Config { init } => {
            if init && !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; quiet unless `RUST_LOG` asks for more
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
