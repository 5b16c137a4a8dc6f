//! Expense service
//!
//! Business logic for the four expense operations. Every call loads the full
//! record set fresh from storage; only `add` writes it back.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::export::export_expenses_csv;
use crate::models::{Amount, Expense};
use crate::storage::Storage;

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Amount,
    pub category: String,
    pub note: String,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense and persist the full list
    pub fn add(&self, input: CreateExpenseInput) -> TrackerResult<Expense> {
        validate_input(&input)?;

        let expenses = self.storage.expenses.load()?;
        let expense = Expense::new(input.amount, input.category, input.note);
        let expenses = append_expense(expenses, expense.clone());
        self.storage.expenses.save(&expenses)?;

        tracing::info!(
            amount = %expense.amount.value(),
            category = %expense.category,
            count = expenses.len(),
            "expense added"
        );
        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.load()
    }

    /// Sum of every recorded amount
    pub fn total(&self) -> TrackerResult<Amount> {
        total_of(&self.storage.expenses.load()?)
    }

    /// Write every expense to a CSV file, returning how many were written
    ///
    /// The store is loaded before the destination is created, so a broken
    /// store leaves no file behind.
    pub fn export_csv(&self, destination: &Path) -> TrackerResult<usize> {
        let expenses = self.storage.expenses.load()?;

        let write = || -> Result<(), Box<dyn std::error::Error>> {
            let file = File::create(destination)?;
            export_expenses_csv(&expenses, BufWriter::new(file))?;
            Ok(())
        };
        write().map_err(|e| {
            tracing::debug!(path = %destination.display(), error = %e, "export failed");
            TrackerError::unwritable(destination)
        })?;

        tracing::info!(path = %destination.display(), count = expenses.len(), "expenses exported");
        Ok(expenses.len())
    }
}

/// Reject input the argument parser cannot rule out on its own
fn validate_input(input: &CreateExpenseInput) -> TrackerResult<()> {
    if !input.amount.is_positive() {
        return Err(TrackerError::Validation(
            "amount must be greater than 0".into(),
        ));
    }
    if input.category.trim().is_empty() {
        return Err(TrackerError::Validation(
            "category must not be empty".into(),
        ));
    }
    Ok(())
}

/// Append an expense to the end of the list
pub fn append_expense(mut expenses: Vec<Expense>, expense: Expense) -> Vec<Expense> {
    expenses.push(expense);
    expenses
}

/// Exact decimal sum of all amounts; zero for an empty list
pub fn total_of(expenses: &[Expense]) -> TrackerResult<Amount> {
    Amount::checked_sum(expenses.iter().map(|e| &e.amount)).ok_or(TrackerError::TotalOverflow)
}
