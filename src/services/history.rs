//! History aggregation service
//!
//! Derives per-month totals for every month other than the active one. The
//! aggregation is always a full recomputation from the raw expense list,
//! never an incremental patch, so history can never drift out of sync with
//! the ledger: rebuilding twice with no ledger change yields identical output.

use std::collections::HashMap;

use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, Money, MonthKey, MonthSummary};
use crate::storage::Storage;

/// Service for the archived month history
pub struct HistoryService<'a> {
    storage: &'a Storage,
}

/// Partition expenses by month key into running sums, excluding the active
/// month, and emit one summary per non-empty partition
///
/// Pure function of its inputs. Ordered by month descending (most recent
/// archived month first). Months with no expenses never appear.
pub fn aggregate(expenses: &[Expense], active_month: MonthKey) -> Vec<MonthSummary> {
    let mut totals: HashMap<MonthKey, Money> = HashMap::new();

    for expense in expenses {
        let month = expense.month_key();
        if month != active_month {
            *totals.entry(month).or_insert_with(Money::zero) += expense.amount;
        }
    }

    let mut history: Vec<MonthSummary> = totals
        .into_iter()
        .map(|(month, total)| MonthSummary::new(month, total))
        .collect();
    history.sort_by(|a, b| b.month.cmp(&a.month));
    history
}

impl<'a> HistoryService<'a> {
    /// Create a new history service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Recompute history from the ledger and persist it
    ///
    /// Returns the rebuilt list. Idempotent for a fixed ledger and active
    /// month.
    pub fn rebuild(&self, active_month: MonthKey) -> TallyResult<Vec<MonthSummary>> {
        let expenses = self.storage.expenses.get_all()?;
        let history = aggregate(&expenses, active_month);

        self.storage.state.set_history(history.clone())?;
        self.storage.state.save()?;
        Ok(history)
    }

    /// The current archived history, most recent month first
    pub fn list(&self) -> TallyResult<Vec<MonthSummary>> {
        self.storage.state.history()
    }

    /// Discard all archived data
    ///
    /// Removes every expense whose month is not the active month, clears the
    /// history list, persists, and rebuilds (yielding empty history).
    /// Irreversible; callers are responsible for confirming with the user
    /// first. Returns the number of discarded expense records.
    pub fn clear(&self) -> TallyResult<usize> {
        let active = self
            .storage
            .state
            .active_month()?
            .ok_or_else(|| TallyError::Config("active month not initialized".into()))?;

        let discarded = self.storage.expenses.retain_month(active)?;
        self.storage.expenses.save()?;

        self.storage.state.set_history(Vec::new())?;
        self.storage.state.save()?;

        self.rebuild(active)?;
        Ok(discarded)
    }
}
