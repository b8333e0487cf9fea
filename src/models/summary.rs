//! Archived month summary
//!
//! One entry per archived month. Derived data: always fully recomputable from
//! the expense ledger plus the active month, never independently edited.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::MonthKey;

/// Total spending for one archived month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The archived month
    pub month: MonthKey,

    /// Sum of all expense amounts recorded for that month
    pub total: Money,
}

impl MonthSummary {
    /// Create a new summary entry
    pub fn new(month: MonthKey, total: Money) -> Self {
        Self { month, total }
    }
}

impl fmt::Display for MonthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.total)
    }
}
