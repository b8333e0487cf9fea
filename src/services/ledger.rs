//! Expense ledger service
//!
//! Business logic for recording and removing expenses. Every mutation is
//! validated first, persisted immediately, and followed by a history rebuild
//! so derived state never lags behind the ledger.

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{Expense, ExpenseId, Money, MonthKey};
use crate::storage::Storage;

use super::history::HistoryService;
use super::notice::Notice;

/// Service for expense ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense from raw user input
    ///
    /// Validates before mutating: the description must be non-empty, the
    /// amount must parse to a positive value, the date must be a valid
    /// `YYYY-MM-DD` calendar date. Nothing is persisted on a validation
    /// failure.
    ///
    /// Returns the created expense and, when it is dated outside the active
    /// month, a [`Notice::BackdatedEntryAdded`] — the expense still lands in
    /// history immediately via the rebuild, not on the next rollover.
    pub fn add(
        &self,
        description: &str,
        amount_text: &str,
        date_text: &str,
    ) -> TallyResult<(Expense, Option<Notice>)> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TallyError::Validation(
                "description cannot be empty".into(),
            ));
        }

        let amount = Money::parse(amount_text)
            .map_err(|e| TallyError::Validation(e.to_string()))?;
        if !amount.is_positive() {
            return Err(TallyError::Validation(format!(
                "amount must be positive, got {}",
                amount
            )));
        }

        let date = NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d")
            .map_err(|_| TallyError::Validation(format!("invalid date: {}", date_text)))?;

        let active = self.active_month()?;
        let expense = Expense::new(description, amount, date);

        self.storage.expenses.insert(expense.clone())?;
        self.storage.expenses.save()?;

        HistoryService::new(self.storage).rebuild(active)?;

        let notice = if expense.month_key() != active {
            Some(Notice::BackdatedEntryAdded { date })
        } else {
            None
        };

        Ok((expense, notice))
    }

    /// Resolve user-supplied ID text to a stored expense's ID
    ///
    /// Accepts the full UUID or the short display form (`exp-` plus a UUID
    /// prefix). A prefix must identify exactly one expense; no match or an
    /// ambiguous match resolves to `None`.
    pub fn resolve_id(&self, input: &str) -> TallyResult<Option<ExpenseId>> {
        let text = input.trim();
        if let Ok(id) = text.parse::<ExpenseId>() {
            return Ok(Some(id));
        }

        let text = text.strip_prefix("exp-").unwrap_or(text);
        if text.is_empty() {
            return Ok(None);
        }

        Ok(self
            .storage
            .expenses
            .find_by_id_prefix(&text.to_lowercase())?
            .map(|e| e.id))
    }

    /// Delete an expense by ID
    ///
    /// Returns `false` for an unknown ID (a no-op, not an error). On success
    /// the ledger is persisted and history rebuilt.
    pub fn remove(&self, id: ExpenseId) -> TallyResult<bool> {
        let removed = self.storage.expenses.delete(id)?;
        if removed {
            self.storage.expenses.save()?;
            let active = self.active_month()?;
            HistoryService::new(self.storage).rebuild(active)?;
        }
        Ok(removed)
    }

    /// Expenses for a month, sorted by date descending
    pub fn expenses_for_month(&self, month: MonthKey) -> TallyResult<Vec<Expense>> {
        self.storage.expenses.get_by_month(month)
    }

    /// Sum of expense amounts for a month (zero when empty)
    pub fn total_for_month(&self, month: MonthKey) -> TallyResult<Money> {
        self.storage.expenses.total_for_month(month)
    }

    /// The active month marker
    ///
    /// Requires that the rollover engine has reconciled state at least once.
    pub fn active_month(&self) -> TallyResult<MonthKey> {
        self.storage
            .state
            .active_month()?
            .ok_or_else(|| TallyError::Config("active month not initialized".into()))
    }
}
