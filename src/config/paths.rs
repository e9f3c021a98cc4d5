//! Path management for the expense tracker
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `expense-cli`
//!    (`~/.config/expense-cli` on Linux, `%APPDATA%\expense-cli` on Windows)
//!
//! The data file itself can be pointed elsewhere with [`ExpensePaths::with_data_file`].

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ExpenseError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_CLI_DATA_DIR";

const APP_DIR_NAME: &str = "expense-cli";
const DATA_FILE_NAME: &str = "data.json";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// Base directory for settings and the audit log
    base_dir: PathBuf,
    /// Explicit data file location, if overridden
    data_file: Option<PathBuf>,
}

impl ExpensePaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, ExpenseError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            data_file: None,
        }
    }

    /// Override the location of the data file
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = Some(data_file.into());
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the persisted expense collection
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join(DATA_FILE_NAME))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory and the data file's parent exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseError::Io(format!("Failed to create base directory: {}", e)))?;

        if let Some(parent) = self.data_file().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Io(format!("Failed to create data directory: {}", e))
                })?;
            }
        }

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ExpenseError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| ExpenseError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join(APP_DIR_NAME))
}
