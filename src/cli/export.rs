//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json, export_expenses_yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated rows
    Csv,
    /// Same layout as the data file
    Json,
    /// Human-readable YAML
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ExpenseResult<()> {
    let expenses = storage.expenses.get_all()?;

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_expenses_csv(&expenses, &mut writer)?,
        ExportFormat::Json => export_expenses_json(&expenses, &mut writer)?,
        ExportFormat::Yaml => export_expenses_yaml(&expenses, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    println!(
        "Exported {} expenses to {}",
        expenses.len(),
        args.output.display()
    );
    Ok(())
}
