//! Expense repository for JSON storage
//!
//! Holds the full expense collection in memory and persists it as a single
//! JSON array. The whole file is read once at load and rewritten in full on
//! every save.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::ExpenseError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_bytes, write_json_atomic};

/// What `load` found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No file existed; an empty one was created
    Created,
    /// The file existed but was blank; left untouched
    Blank,
    /// The file parsed; this many expenses were loaded
    Loaded(usize),
    /// The file could not be parsed and was reset to an empty collection
    Reset {
        /// Parser message describing what was wrong
        reason: String,
    },
}

impl LoadStatus {
    /// Whether the persisted data was discarded
    pub fn was_reset(&self) -> bool {
        matches!(self, Self::Reset { .. })
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection from disk
    ///
    /// A missing file is created as `[]`. A blank file loads as empty without
    /// being rewritten. A file that doesn't parse as an expense array,
    /// including one that isn't valid UTF-8, is overwritten with `[]`; its
    /// previous contents are lost. Only I/O failures are returned as errors.
    pub fn load(&self) -> Result<LoadStatus, ExpenseError> {
        let (expenses, status) = match read_bytes(&self.path)? {
            None => {
                write_json_atomic(&self.path, &Vec::<Expense>::new())?;
                (Vec::new(), LoadStatus::Created)
            }
            Some(contents) if contents.iter().all(u8::is_ascii_whitespace) => {
                (Vec::new(), LoadStatus::Blank)
            }
            Some(contents) => match serde_json::from_slice::<Vec<Expense>>(&contents) {
                Ok(expenses) => {
                    let count = expenses.len();
                    (expenses, LoadStatus::Loaded(count))
                }
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "data file is corrupt, resetting"
                    );
                    write_json_atomic(&self.path, &Vec::<Expense>::new())?;
                    (
                        Vec::new(),
                        LoadStatus::Reset {
                            reason: e.to_string(),
                        },
                    )
                }
            },
        };

        tracing::debug!(path = %self.path.display(), status = ?status, "loaded expenses");

        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses;

        Ok(status)
    }

    /// Save the full collection to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)?;
        tracing::debug!(path = %self.path.display(), count = data.len(), "saved expenses");
        Ok(())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Get an expense by id
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// The id the next added expense receives
    pub fn next_id(&self) -> Result<ExpenseId, ExpenseError> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        ExpenseId::next_after(data.iter().map(|e| e.id))
    }

    /// Append an expense to the end of the collection
    pub fn insert(&self, expense: Expense) -> Result<(), ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.iter().any(|e| e.id == expense.id) {
            return Err(ExpenseError::Storage(format!(
                "Expense id {} already in use",
                expense.id
            )));
        }

        data.push(expense);
        Ok(())
    }

    /// Replace an existing expense in place, keeping its position
    ///
    /// Returns the previous version, or `None` if no expense has that id.
    pub fn replace(&self, expense: Expense) -> Result<Option<Expense>, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = expense.id;
        Ok(data
            .iter_mut()
            .find(|e| e.id == id)
            .map(|slot| std::mem::replace(slot, expense)))
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, ExpenseError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let index = data.iter().position(|e| e.id == id);
        Ok(index.map(|index| data.remove(index)))
    }
}
