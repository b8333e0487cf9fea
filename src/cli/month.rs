//! Month and history CLI commands
//!
//! Implements the history/reset/clear-history commands. The destructive
//! commands require an explicit confirmation (the `--yes` flag or an
//! interactive prompt); the core services never prompt.

use std::io::{self, BufRead, Write};

use chrono::Local;

use crate::config::Settings;
use crate::display::format_history;
use crate::error::TallyResult;
use crate::services::{HistoryService, RolloverService};
use crate::storage::Storage;

/// Show the archived month history
pub fn handle_history(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let service = HistoryService::new(storage);
    let history = service.list()?;

    print!("{}", format_history(&history, settings));
    Ok(())
}

/// Manually archive the active month and start a fresh one
pub fn handle_reset(storage: &Storage, yes: bool) -> TallyResult<()> {
    if !yes
        && !confirm(
            "Manually reset the month? This archives the current month's expenses. [y/N] ",
        )?
    {
        println!("Reset cancelled.");
        return Ok(());
    }

    let service = RolloverService::new(storage);
    let notice = service.manual_reset(Local::now().date_naive())?;

    match notice {
        Some(notice) => println!("{}", notice),
        None => println!("Month reset; nothing to archive."),
    }
    Ok(())
}

/// Discard all archived history (irreversible)
pub fn handle_clear_history(storage: &Storage, yes: bool) -> TallyResult<()> {
    if !yes
        && !confirm(
            "Clear ALL monthly spending history? This action cannot be undone. [y/N] ",
        )?
    {
        println!("Clear cancelled.");
        return Ok(());
    }

    let service = HistoryService::new(storage);
    let discarded = service.clear()?;

    println!(
        "Monthly spending history has been cleared ({} archived expense{} discarded).",
        discarded,
        if discarded == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Ask the user a yes/no question on stdin
fn confirm(prompt: &str) -> TallyResult<bool> {
    print!("{}", prompt);
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
