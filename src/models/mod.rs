//! Core data models for the expense tracker

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::Amount;
pub use expense::Expense;
pub use ids::{ExpenseId, IdArg};
