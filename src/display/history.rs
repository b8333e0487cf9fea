//! History display formatting

use crate::config::Settings;
use crate::models::MonthSummary;

/// Format the archived history as a two-column table
pub fn format_history(history: &[MonthSummary], settings: &Settings) -> String {
    if history.is_empty() {
        return "No history yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:16} {:>10}\n", "Month", "Total"));
    output.push_str(&"-".repeat(27));
    output.push('\n');

    for entry in history {
        output.push_str(&format!(
            "{:16} {:>10}\n",
            entry.month.friendly(),
            entry.total.format_with_symbol(&settings.currency_symbol)
        ));
    }

    output
}
