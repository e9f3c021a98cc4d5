//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Expense;

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added
    Create,
    /// Expense was updated
    Update,
    /// Expense was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one mutation of the expense collection with before/after
/// snapshots of the affected record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Id of the affected expense
    pub expense_id: u64,

    /// Description of the expense at the time of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Snapshot before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: expense.id.get(),
            description: Some(expense.description.clone()),
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for an added expense
    pub fn create(expense: &Expense) -> Self {
        Self {
            after: serde_json::to_value(expense).ok(),
            ..Self::new(Operation::Create, expense)
        }
    }

    /// Entry for an updated expense
    pub fn update(before: &Expense, after: &Expense) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            before: before_json,
            after: after_json,
            diff_summary,
            ..Self::new(Operation::Update, after)
        }
    }

    /// Entry for a deleted expense
    pub fn delete(expense: &Expense) -> Self {
        Self {
            before: serde_json::to_value(expense).ok(),
            ..Self::new(Operation::Delete, expense)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Expense {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(description) = &self.description {
            output.push_str(&format!(" ({})", description));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
