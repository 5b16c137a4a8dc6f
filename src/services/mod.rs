//! Service layer for the expense tracker
//!
//! Sits between the CLI handlers and storage. Services load what they need
//! from storage on every call; they hold no state of their own.

pub mod expense;

pub use expense::{append_expense, total_of, CreateExpenseInput, ExpenseService};
