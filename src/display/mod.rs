//! Terminal display formatting for tally-cli
//!
//! Pure string formatting; nothing here touches storage or the clock.

pub mod expense;
pub mod history;

pub use expense::{format_expense_row, format_month_register};
pub use history::format_history;
