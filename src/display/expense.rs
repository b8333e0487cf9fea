//! Expense display formatting
//!
//! Provides utilities for formatting the active month's expenses for
//! terminal display. All amount and date rendering goes through the user's
//! settings.

use crate::config::Settings;
use crate::models::{Expense, Money, MonthKey};

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{} {:10} {:24} {:>10}",
        expense.id,
        expense.date.format(&settings.date_format).to_string(),
        truncate(&expense.description, 24),
        expense.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the active month's expenses as a register with a total line
pub fn format_month_register(
    month: MonthKey,
    expenses: &[Expense],
    total: Money,
    settings: &Settings,
) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expenses for {}\n", month.friendly()));

    if expenses.is_empty() {
        output.push_str("No expenses yet for this month.\n");
        return output;
    }

    output.push_str(&format!(
        "{:12} {:10} {:24} {:>10}\n",
        "Id", "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "Total: {}\n",
        total.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
