//! Advisory notices emitted by core operations
//!
//! Notices are not errors: they tell the presentation layer that something
//! worth surfacing happened (a month was archived, a back-dated entry went
//! straight to history). The core never prints; callers decide how to render.

use chrono::NaiveDate;
use std::fmt;

use crate::models::{Money, MonthKey};

/// An advisory event for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// An expense dated outside the active month was added; it is already
    /// reflected in history, not held for rollover
    BackdatedEntryAdded { date: NaiveDate },

    /// A month was archived with a non-zero total
    MonthArchived { month: MonthKey, total: Money },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackdatedEntryAdded { date } => write!(
                f,
                "Expense for {} (a past month) was added and is already reflected in history.",
                date.format("%Y-%m-%d")
            ),
            Self::MonthArchived { month, total } => write!(
                f,
                "Month ended! Your total of {} for {} has been archived.",
                total,
                month.friendly()
            ),
        }
    }
}
