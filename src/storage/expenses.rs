//! Expense persistence
//!
//! The ledger only needs two things from storage: load the whole record list
//! (or learn that none was ever saved) and save the whole list. The on-disk
//! format is a JSON array of expenses.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};

/// Persistence collaborator for the expense list
pub trait ExpenseStore {
    /// Load every saved expense; `Ok(None)` when nothing was saved yet
    fn load(&self) -> ExpenseResult<Option<Vec<Expense>>>;

    /// Replace the saved list with `expenses`
    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()>;
}

// a store shared with the caller that handed it over
impl<T: ExpenseStore + ?Sized> ExpenseStore for Arc<T> {
    fn load(&self) -> ExpenseResult<Option<Vec<Expense>>> {
        (**self).load()
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        (**self).save(expenses)
    }
}

/// Expenses stored in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ExpenseStore for JsonFileStore {
    /// Records that break the expense invariants make the whole file invalid
    fn load(&self) -> ExpenseResult<Option<Vec<Expense>>> {
        let expenses: Option<Vec<Expense>> = read_json(&self.path)?;

        for expense in expenses.iter().flatten() {
            expense.validate().map_err(|e| {
                ExpenseError::Storage(format!(
                    "Invalid expense {} in {}: {}",
                    expense.id,
                    self.path.display(),
                    e
                ))
            })?;
        }

        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, expenses)
    }
}

/// In-memory store, kept for the lifetime of the value
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<Option<Vec<Expense>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `expenses`
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            data: RwLock::new(Some(expenses)),
        }
    }
}

impl ExpenseStore for MemoryStore {
    fn load(&self) -> ExpenseResult<Option<Vec<Expense>>> {
        let data = self
            .data
            .read()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = Some(expenses.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId, Money, PaymentMethod};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new(
                ExpenseId::new("a"),
                "Electricity bill",
                Money::from_cents(6230),
                Category::Utilities,
                Utc.with_ymd_and_hms(2025, 2, 3, 9, 15, 0).unwrap(),
            )
            .with_payment_method(PaymentMethod::Transfer),
            Expense::new(
                ExpenseId::new("b"),
                "Cinema",
                Money::from_cents(1800),
                Category::Entertainment,
                Utc.with_ymd_and_hms(2025, 2, 7, 20, 0, 0).unwrap(),
            )
            .with_note("with Alex"),
        ]
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("expenses.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("expenses.json");

        JsonFileStore::new(path.clone()).save(&sample()).unwrap();

        let reloaded = JsonFileStore::new(path).load().unwrap().unwrap();
        assert_eq!(reloaded, sample());
    }

    #[test]
    fn test_file_store_writes_plain_array() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("expenses.json"));
        store.save(&sample()).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[0]["paymentMethod"], "Transfer");
        assert_eq!(value[1]["note"], "with Alex");
    }

    #[test]
    fn test_file_store_malformed_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, r#"[{"id": "x", "amount": "lots"}]"#).unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_file_store_rejects_non_positive_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        for amount in ["-25", "0"] {
            let raw = format!(
                r#"[{{"id": "x", "description": "Refund", "amount": {}, "category": "Food", "date": "2025-02-03T09:15:00Z"}}]"#,
                amount
            );
            std::fs::write(&path, raw).unwrap();

            let err = JsonFileStore::new(path.clone()).load().unwrap_err();
            assert!(matches!(err, ExpenseError::Storage(_)));
            assert!(err.to_string().contains("greater than zero"));
        }
    }

    #[test]
    fn test_file_store_rejects_oversized_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(
            &path,
            r#"[{"id": "x", "description": "Yacht", "amount": 1e300, "category": "Travel", "date": "2025-02-03T09:15:00Z"}]"#,
        )
        .unwrap();

        let err = JsonFileStore::new(path).load().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));

        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
    }
}
