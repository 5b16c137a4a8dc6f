//! Expense display formatting
//!
//! Produces the exact lines the command-line interface prints.

use std::path::Path;

use crate::models::{Amount, Expense};

/// Printed by `list` when there is nothing to show
pub const NO_EXPENSES: &str = "No expenses recorded.";

/// Confirmation line for a newly added expense
pub fn format_added(expense: &Expense) -> String {
    match expense.note() {
        Some(note) => format!("Added: {} | {} | {}", expense.amount, expense.category, note),
        None => format!("Added: {} | {}", expense.amount, expense.category),
    }
}

/// One numbered row of the expense list (1-indexed)
pub fn format_expense_row(position: usize, expense: &Expense) -> String {
    format!(
        "{}. {} | {} | {}",
        position,
        expense.amount,
        expense.category,
        expense.note().unwrap_or("-")
    )
}

/// All rows of the expense list, or the empty-state line
pub fn format_expense_list(expenses: &[Expense]) -> Vec<String> {
    if expenses.is_empty() {
        return vec![NO_EXPENSES.to_string()];
    }

    expenses
        .iter()
        .enumerate()
        .map(|(i, expense)| format_expense_row(i + 1, expense))
        .collect()
}

/// Line printed by `total`
pub fn format_total(total: Amount) -> String {
    format!("Total: {}", total)
}

/// Confirmation line for a finished CSV export
pub fn format_exported(count: usize, destination: &Path) -> String {
    format!("Exported {} expense(s) to {}", count, destination.display())
}
