//! Core data models for tally-cli
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, month keys, money amounts, and archived
//! month summaries.

pub mod expense;
pub mod ids;
pub mod money;
pub mod month;
pub mod summary;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
pub use month::MonthKey;
pub use summary::MonthSummary;
