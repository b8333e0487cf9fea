//! Expense repository for JSON storage
//!
//! Manages loading and saving the full expense ledger to expenses.json.
//! The in-memory list preserves insertion order; queries sort on the way out.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{Expense, ExpenseId, Money, MonthKey};

use super::file_io::{read_json_recover, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
///
/// Holds the authoritative list of all expense records across all time,
/// in insertion order.
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing file yields an empty ledger; a corrupt file is discarded
    /// with a logged warning rather than crashing.
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: ExpenseData = read_json_recover(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.expenses;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|e| e.id == id).cloned())
    }

    /// Find the expense whose UUID starts with the given prefix
    ///
    /// Returns `None` when the prefix matches no expense, or when it is
    /// ambiguous (matches more than one).
    pub fn find_by_id_prefix(&self, prefix: &str) -> Result<Option<Expense>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matches = data
            .iter()
            .filter(|e| e.id.as_uuid().to_string().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(Some(found.clone())),
            _ => Ok(None),
        }
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get all expenses belonging to a month, sorted by date descending
    ///
    /// The sort is stable, so same-date expenses keep their insertion order.
    pub fn get_by_month(&self, month: MonthKey) -> Result<Vec<Expense>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<Expense> = data
            .iter()
            .filter(|e| e.month_key() == month)
            .cloned()
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    /// Sum of all expense amounts for a month (zero when empty)
    pub fn total_for_month(&self, month: MonthKey) -> Result<Money, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|e| e.month_key() == month)
            .map(|e| e.amount)
            .sum())
    }

    /// Append a new expense
    pub fn insert(&self, expense: Expense) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(expense);
        Ok(())
    }

    /// Delete an expense by ID
    ///
    /// Returns `false` when no expense with that ID exists; this is a no-op,
    /// not an error.
    pub fn delete(&self, id: ExpenseId) -> Result<bool, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|e| e.id != id);
        Ok(data.len() < before)
    }

    /// Remove every expense belonging to a month, returning the removed records
    pub fn drain_month(&self, month: MonthKey) -> Result<Vec<Expense>, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let (removed, kept): (Vec<Expense>, Vec<Expense>) =
            data.drain(..).partition(|e| e.month_key() == month);
        *data = kept;
        Ok(removed)
    }

    /// Keep only expenses belonging to the given month, discarding the rest
    ///
    /// Returns the number of discarded records.
    pub fn retain_month(&self, month: MonthKey) -> Result<usize, TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let before = data.len();
        data.retain(|e| e.month_key() == month);
        Ok(before - data.len())
    }

    /// Count all expenses
    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn expense(desc: &str, cents: i64, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            desc,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let exp = expense("Coffee", 450, 2025, 1, 15);
        let id = exp.id;
        repo.insert(exp).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 450);
    }

    #[test]
    fn test_find_by_id_prefix() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let exp = expense("Coffee", 450, 2025, 1, 15);
        let id = exp.id;
        repo.insert(exp).unwrap();

        let prefix = &id.as_uuid().to_string()[..8];
        let found = repo.find_by_id_prefix(prefix).unwrap().unwrap();
        assert_eq!(found.id, id);

        assert!(repo.find_by_id_prefix("zzzz").unwrap().is_none());
    }

    #[test]
    fn test_get_by_month_sorted_descending() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(expense("Early", 100, 2025, 1, 5)).unwrap();
        repo.insert(expense("Late", 200, 2025, 1, 20)).unwrap();
        repo.insert(expense("Other month", 300, 2025, 2, 1)).unwrap();

        let january = repo.get_by_month(MonthKey::new(2025, 1).unwrap()).unwrap();
        assert_eq!(january.len(), 2);
        assert_eq!(january[0].description, "Late");
        assert_eq!(january[1].description, "Early");
    }

    #[test]
    fn test_total_for_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(expense("A", 100, 2025, 1, 5)).unwrap();
        repo.insert(expense("B", 250, 2025, 1, 20)).unwrap();
        repo.insert(expense("C", 999, 2025, 2, 1)).unwrap();

        let total = repo.total_for_month(MonthKey::new(2025, 1).unwrap()).unwrap();
        assert_eq!(total.cents(), 350);

        let empty = repo.total_for_month(MonthKey::new(2024, 6).unwrap()).unwrap();
        assert_eq!(empty, Money::zero());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let exp = expense("Coffee", 450, 2025, 1, 15);
        let id = exp.id;
        repo.insert(exp).unwrap();

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);

        // Deleting again is a no-op
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_drain_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(expense("A", 100, 2025, 1, 5)).unwrap();
        repo.insert(expense("B", 200, 2025, 1, 20)).unwrap();
        repo.insert(expense("C", 300, 2025, 2, 1)).unwrap();

        let removed = repo.drain_month(MonthKey::new(2025, 1).unwrap()).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(
            repo.total_for_month(MonthKey::new(2025, 1).unwrap()).unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_retain_month() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.insert(expense("A", 100, 2025, 1, 5)).unwrap();
        repo.insert(expense("B", 200, 2024, 12, 20)).unwrap();
        repo.insert(expense("C", 300, 2024, 11, 1)).unwrap();

        let discarded = repo.retain_month(MonthKey::new(2025, 1).unwrap()).unwrap();
        assert_eq!(discarded, 2);
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.get_all().unwrap()[0].description, "A");
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let exp = expense("Coffee", 450, 2025, 1, 15);
        let id = exp.id;
        repo.insert(exp).unwrap();
        repo.save().unwrap();

        // Create new repo and load
        let path = temp_dir.path().join("expenses.json");
        let repo2 = ExpenseRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 450);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(temp_dir.path().join("expenses.json"), "{broken").unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
