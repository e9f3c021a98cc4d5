//! expense-cli - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the `expense` command:
//! adding, listing, updating, deleting and summarizing expenses kept in a
//! single JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, ids, amounts)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: clap command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::config::ExpensePaths;
//! use expense_cli::services::ExpenseService;
//! use expense_cli::storage::Storage;
//!
//! let mut storage = Storage::new(ExpensePaths::new()?)?;
//! storage.load_all()?;
//! let expense = ExpenseService::new(&storage).add("Lunch", "20")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
