//! Expense CLI commands
//!
//! Implements the add/list/delete/total commands against the ledger service.

use chrono::Local;

use crate::config::Settings;
use crate::display::format_month_register;
use crate::error::TallyResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Add a new expense
///
/// `date` defaults to today when not given. Prints the created record, any
/// back-dated notice, and the updated register for the active month.
pub fn handle_add(
    storage: &Storage,
    settings: &Settings,
    description: &str,
    amount: &str,
    date: Option<&str>,
) -> TallyResult<()> {
    let service = LedgerService::new(storage);

    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let date = date.unwrap_or(&today);

    let (expense, notice) = service.add(description, amount, date)?;
    println!(
        "Added expense: {} {} {}",
        expense.date.format(&settings.date_format),
        expense.description,
        expense.amount.format_with_symbol(&settings.currency_symbol)
    );
    println!("  ID: {}", expense.id);

    if let Some(notice) = notice {
        println!();
        println!("{}", notice);
    }

    println!();
    print_register(storage, settings)?;
    Ok(())
}

/// List the active month's expenses with the running total
pub fn handle_list(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    print_register(storage, settings)
}

/// Delete an expense by ID
///
/// Accepts the full UUID or the short `exp-` form shown by `add` and `list`.
/// An unknown ID is reported but is not an error.
pub fn handle_delete(storage: &Storage, id: &str) -> TallyResult<()> {
    let service = LedgerService::new(storage);

    match service.resolve_id(id)? {
        Some(resolved) => {
            if service.remove(resolved)? {
                println!("Deleted expense {}", resolved);
            } else {
                println!("No expense found with ID: {}", id);
            }
        }
        None => println!("No expense found with ID: {}", id),
    }
    Ok(())
}

/// Show the running total for the active month
pub fn handle_total(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let service = LedgerService::new(storage);
    let active = service.active_month()?;
    let total = service.total_for_month(active)?;

    println!(
        "{}: {}",
        active.friendly(),
        total.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

fn print_register(storage: &Storage, settings: &Settings) -> TallyResult<()> {
    let service = LedgerService::new(storage);
    let active = service.active_month()?;
    let expenses = service.expenses_for_month(active)?;
    let total = service.total_for_month(active)?;

    print!("{}", format_month_register(active, &expenses, total, settings));
    Ok(())
}
