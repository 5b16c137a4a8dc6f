//! Core data models for the expense tracker
//!
//! An expense record and the decimal amount type it carries.

pub mod amount;
pub mod expense;

pub use amount::Amount;
pub use expense::{format_timestamp, Expense};
