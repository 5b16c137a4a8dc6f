//! Expense CLI commands
//!
//! Implements the `add`, `list`, `total`, `export` and `config` commands.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_added, format_expense_list, format_exported, format_total};
use crate::error::TrackerResult;
use crate::models::Amount;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Expense commands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Add an expense entry
    Add {
        /// Expense amount (must be > 0)
        #[arg(value_parser = parse_amount, allow_hyphen_values = true)]
        amount: Amount,
        /// Expense category, e.g. food, rent, travel
        category: String,
        /// Optional note
        note: Option<String>,
    },
    /// List all saved expenses
    List,
    /// Show the total amount spent
    Total,
    /// Export all expenses to a CSV file
    Export {
        /// Output CSV filename/path
        csv_filename: PathBuf,
    },
    /// Show where expenses are stored
    Config,
}

/// Value parser for the `add` amount argument
pub fn parse_amount(s: &str) -> TrackerResult<Amount> {
    Amount::parse_positive(s)
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            note,
        } => {
            let expense = service.add(CreateExpenseInput {
                amount,
                category,
                note: note.unwrap_or_default(),
            })?;
            println!("{}", format_added(&expense));
        }
        ExpenseCommands::List => {
            for line in format_expense_list(&service.list()?) {
                println!("{}", line);
            }
        }
        ExpenseCommands::Total => {
            println!("{}", format_total(service.total()?));
        }
        ExpenseCommands::Export { csv_filename } => {
            let count = service.export_csv(&csv_filename)?;
            println!("{}", format_exported(count, &csv_filename));
        }
        ExpenseCommands::Config => {
            println!("Data file: {}", storage.paths().data_file().display());
        }
    }

    Ok(())
}
