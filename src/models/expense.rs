//! Expense model
//!
//! Represents a single dated expense record. The ledger owns these
//! exclusively: records are created on add and destroyed on delete or when
//! their month is archived.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use super::month::MonthKey;

/// A single expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on (never empty)
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh identifier
    pub fn new(description: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            date,
        }
    }

    /// The month this expense belongs to
    pub fn month_key(&self) -> MonthKey {
        MonthKey::of_date(self.date)
    }
}
