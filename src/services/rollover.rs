//! Month rollover engine
//!
//! Detects when the persisted active month is stale, archives that month's
//! expenses, and advances the marker. Two triggers exist: implicit
//! reconciliation on load, and an explicit user-driven reset.
//!
//! Core operations take `today` as an argument; only the CLI layer reads the
//! wall clock.

use chrono::NaiveDate;
use log::info;

use crate::error::TallyResult;
use crate::models::MonthKey;
use crate::storage::Storage;

use super::history::HistoryService;
use super::ledger::LedgerService;
use super::notice::Notice;

/// Service for month rollover and state reconciliation
pub struct RolloverService<'a> {
    storage: &'a Storage,
}

impl<'a> RolloverService<'a> {
    /// Create a new rollover service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Reconcile persisted state against today's date (implicit rollover)
    ///
    /// Run once after loading. On first run the active month is initialized
    /// to today's month. When the stored active month is stale, that single
    /// month is archived and the marker jumps directly to today's key — if
    /// several real-world months elapsed since the last run, the skipped
    /// months are never materialized (history only reflects months holding
    /// at least one expense).
    ///
    /// Always finishes with a history rebuild and a state save, so a freshly
    /// loaded tracker is fully consistent.
    pub fn reconcile(&self, today: NaiveDate) -> TallyResult<Option<Notice>> {
        let today_key = MonthKey::of_date(today);

        let notice = match self.storage.state.active_month()? {
            Some(stored) if stored != today_key => {
                let notice = self.archive(stored)?;
                self.storage.state.set_active_month(today_key)?;
                notice
            }
            Some(_) => None,
            None => {
                // First run
                self.storage.state.set_active_month(today_key)?;
                None
            }
        };

        HistoryService::new(self.storage).rebuild(today_key)?;
        Ok(notice)
    }

    /// Archive the active month now and start a fresh one (explicit rollover)
    ///
    /// Unlike [`reconcile`](Self::reconcile), this archives unconditionally,
    /// even when the active month has not actually ended.
    pub fn manual_reset(&self, today: NaiveDate) -> TallyResult<Option<Notice>> {
        let ledger = LedgerService::new(self.storage);
        let active = ledger.active_month()?;

        let notice = self.archive(active)?;

        let today_key = MonthKey::of_date(today);
        self.storage.state.set_active_month(today_key)?;

        HistoryService::new(self.storage).rebuild(today_key)?;
        Ok(notice)
    }

    /// Archive a single month
    ///
    /// Computes the month's total, removes its expenses from the ledger (a
    /// move, not a copy), and persists. Emits a [`Notice::MonthArchived`]
    /// only when the total is positive; empty months are archived silently
    /// to keep the ledger clean.
    ///
    /// The caller is expected to rebuild history afterwards; the rebuild
    /// re-aggregates whatever remains under this key, which is a no-op in
    /// the normal path.
    pub fn archive(&self, month: MonthKey) -> TallyResult<Option<Notice>> {
        let total = self.storage.expenses.total_for_month(month)?;

        self.storage.expenses.drain_month(month)?;
        self.storage.expenses.save()?;

        if total.is_positive() {
            info!("archived {} with total {}", month, total);
            Ok(Some(Notice::MonthArchived { month, total }))
        } else {
            Ok(None)
        }
    }
}
