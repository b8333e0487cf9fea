//! Tracker state repository for JSON storage
//!
//! Persists the active month marker and the archived history list to
//! state.json. History is derived data; it is stored for inspection but the
//! authoritative copy is always rebuilt from the expense ledger on load.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TallyError;
use crate::models::{MonthKey, MonthSummary};

use super::file_io::{read_json_recover, write_json_atomic};

/// Serializable state data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct StateData {
    /// Which month's expenses are "current"; absent on first run
    active_month: Option<MonthKey>,

    /// Per-month totals for archived months
    #[serde(default)]
    history: Vec<MonthSummary>,
}

/// Repository for the active month marker and archived history
pub struct StateRepository {
    path: PathBuf,
    data: RwLock<StateData>,
}

impl StateRepository {
    /// Create a new state repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(StateData::default()),
        }
    }

    /// Load state from disk
    ///
    /// A missing file yields empty defaults; a corrupt file is discarded
    /// with a logged warning rather than crashing.
    pub fn load(&self) -> Result<(), TallyError> {
        let file_data: StateData = read_json_recover(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data;
        Ok(())
    }

    /// Save state to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// The persisted active month, if one has been recorded
    pub fn active_month(&self) -> Result<Option<MonthKey>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.active_month)
    }

    /// Record a new active month
    pub fn set_active_month(&self, month: MonthKey) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.active_month = Some(month);
        Ok(())
    }

    /// The archived history list
    pub fn history(&self) -> Result<Vec<MonthSummary>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.history.clone())
    }

    /// Replace the history list wholesale
    pub fn set_history(&self, history: Vec<MonthSummary>) -> Result<(), TallyError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.history = history;
        Ok(())
    }
}
