//! Display formatting for terminal output

pub mod expense;

pub use expense::{
    format_added, format_expense_list, format_expense_row, format_exported, format_total,
    NO_EXPENSES,
};
