//! Storage layer for tally-cli
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Writes are synchronous and happen immediately after every
//! mutation, so the files on disk always match in-memory state by the time
//! an operation returns.

pub mod expenses;
pub mod file_io;
pub mod state;

pub use expenses::ExpenseRepository;
pub use state::StateRepository;

use crate::config::paths::TallyPaths;
use crate::error::TallyError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub state: StateRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            state: StateRepository::new(paths.state_file()),
        })
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), TallyError> {
        self.expenses.load()?;
        self.state.load()?;
        Ok(())
    }
}
