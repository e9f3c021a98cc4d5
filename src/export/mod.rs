//! Export of the expense collection
//!
//! - CSV: spreadsheet-compatible rows
//! - JSON: same shape as the data file
//! - YAML: human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::export_expenses_json;
pub use self::yaml::export_expenses_yaml;
