//! CSV Export functionality
//!
//! Writes expenses as `time,amount,category,note` rows. Fields that are
//! absent on a record are written as empty cells.

use std::io::Write;

use crate::models::Expense;

/// Header row of every expense export
pub const EXPENSE_CSV_HEADER: [&str; 4] = ["time", "amount", "category", "note"];

/// Export expenses to CSV, one row per expense in the given order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EXPENSE_CSV_HEADER)?;

    for expense in expenses {
        let amount = expense.amount.to_plain_string();
        csv_writer.write_record([
            expense.time.as_deref().unwrap_or(""),
            amount.as_str(),
            expense.category.as_str(),
            expense.note.as_deref().unwrap_or(""),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
