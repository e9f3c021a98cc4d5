//! Expense display formatting
//!
//! Renders the expense list as a table and formats summary totals.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;
use crate::services::Summary;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// One rendered row of the expense table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format the expense list: a header row, then one row per expense
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: format_date(e.date, &settings.date_format),
        description: e.description.clone(),
        amount: e.amount.format_with_symbol(&settings.currency_symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format a summary total, e.g. `Total expenses for month 3: $25`
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let total = summary.total.format_with_symbol(currency_symbol);
    match summary.month {
        Some(month) => format!("Total expenses for month {}: {}", month, total),
        None => format!("Total expenses: {}", total),
    }
}

/// Format a date, falling back to ISO format if the pattern is invalid
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid { pattern } else { FALLBACK_DATE_FORMAT };
    date.format(pattern).to_string()
}
