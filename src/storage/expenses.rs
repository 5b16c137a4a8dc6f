//! Expense repository for JSON storage
//!
//! Loads and saves the ordered list of expenses. The whole file is read on
//! every load and rewritten on every save; order is insertion order.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{MalformedReason, TrackerError};
use crate::models::{Amount, Expense};

use super::file_io::{read_json_array, write_json_atomic};

/// Repository for expense persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all expenses from disk, in stored order
    ///
    /// A missing file is an empty list.
    pub fn load(&self) -> Result<Vec<Expense>, TrackerError> {
        let items = read_json_array(&self.path)?;

        let expenses = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if amount_out_of_range(&item) {
                    return Err(TrackerError::malformed(
                        &self.path,
                        MalformedReason::AmountOutOfRange,
                    ));
                }
                serde_json::from_value(item).map_err(|e| {
                    tracing::debug!(
                        path = %self.path.display(),
                        index,
                        error = %e,
                        "rejected expense record"
                    );
                    TrackerError::malformed(&self.path, MalformedReason::InvalidRecord)
                })
            })
            .collect::<Result<Vec<Expense>, _>>()?;

        tracing::debug!(path = %self.path.display(), count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    /// Replace the file's contents with the given expenses
    pub fn save(&self, expenses: &[Expense]) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, expenses)?;
        tracing::debug!(path = %self.path.display(), count = expenses.len(), "saved expenses");
        Ok(())
    }
}

/// A numeric `amount` too large (or too precise) for the decimal type
fn amount_out_of_range(item: &Value) -> bool {
    item.get("amount")
        .and_then(Value::as_number)
        .is_some_and(|number| Amount::from_number(number).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        (temp_dir, repo)
    }

    fn expense(amount: &str, category: &str, note: &str) -> Expense {
        Expense::new(Amount::parse(amount).unwrap(), category, note)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_save_and_load_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();
        let expenses = vec![
            expense("12.50", "food", "lunch"),
            expense("8", "transport", ""),
            expense("0.125", "misc", "fractional"),
        ];

        repo.save(&expenses).unwrap();
        let loaded = repo.load().unwrap();

        assert_eq!(loaded, expenses);
    }

    #[test]
    fn test_load_twice_is_equal() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&[expense("1", "a", "")]).unwrap();

        assert_eq!(repo.load().unwrap(), repo.load().unwrap());
    }

    #[test]
    fn test_save_replaces_previous_content() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&[expense("1", "a", ""), expense("2", "b", "")])
            .unwrap();
        repo.save(&[expense("3", "c", "")]).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "c");
    }

    #[test]
    fn test_load_legacy_records() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"amount": 10, "category": "misc", "note": "old"}, {"amount": 2.5, "category": "x"}]"#,
        )
        .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].time, None);
        assert_eq!(loaded[1].note, None);
    }

    #[test]
    fn test_persisted_shape() {
        let (_temp_dir, repo) = create_test_repo();
        repo.save(&[expense("3.25", "coffee", "latte")]).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        let first = &raw[0];
        assert_eq!(first["amount"], serde_json::json!(3.25));
        assert_eq!(first["category"], "coffee");
        assert_eq!(first["note"], "latte");
        assert!(first["time"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[test]
    fn test_invalid_record_is_malformed() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), r#"[{"amount": 1, "category": "ok"}, "not a record"]"#).unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().starts_with("Invalid expense record in "));
    }

    #[test]
    fn test_null_note_loads() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), r#"[{"amount": 5, "category": "misc", "note": null}]"#).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded[0].note(), None);
    }

    #[test]
    fn test_untouched_records_keep_their_form() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            r#"[{"amount": 10, "category": "misc", "note": "old"}, {"amount": 2.50, "category": "x"}]"#,
        )
        .unwrap();

        let mut expenses = repo.load().unwrap();
        expenses.push(expense("0.1", "y", ""));
        repo.save(&expenses).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(repo.path()).unwrap()).unwrap();
        assert!(raw[0]["amount"].is_u64());
        assert_eq!(raw[0]["amount"], 10);
        assert!(raw[1].get("note").is_none());
        assert!(raw[1].get("time").is_none());
    }

    #[test]
    fn test_out_of_range_amount_is_malformed() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), r#"[{"amount": 1e30, "category": "huge"}]"#).unwrap();

        let err = repo.load().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Amount out of range in {}", repo.path().display())
        );
    }

    #[test]
    fn test_non_list_is_malformed() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(repo.path(), "42").unwrap();

        let err = repo.load().unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Expected a list in {}", repo.path().display())
        );
    }
}
