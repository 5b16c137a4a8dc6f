//! Export module for the expense tracker
//!
//! CSV is the only export format; it is meant for spreadsheets.

pub mod csv;

pub use self::csv::{export_expenses_csv, EXPENSE_CSV_HEADER};
