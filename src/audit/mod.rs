//! Audit logging for the expense tracker
//!
//! Records every add, update and delete with before/after snapshots in an
//! append-only, line-delimited JSON log next to the settings file.
//!
//! - `AuditEntry`: one logged mutation
//! - `AuditLogger`: appends entries and reads them back
//! - `generate_diff`: one-line summary of changed fields

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
