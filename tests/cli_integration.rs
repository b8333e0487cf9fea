//! End-to-end tests for the tally binary
//!
//! Each test runs against its own temporary data directory via the
//! `TALLY_CLI_DATA_DIR` override, so tests never touch real user data and
//! can run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_CLI_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn list_starts_empty() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet for this month."));
}

#[test]
fn add_then_total() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "Coffee", "4.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense:"))
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Total: $4.50"));

    tally(&dir)
        .args(["add", "Lunch", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: $16.50"));

    tally(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$16.50"));
}

#[test]
fn add_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "Coffee", "abc"])
        .assert()
        .failure();

    tally(&dir)
        .args(["add", "Coffee", "-4.50"])
        .assert()
        .failure();

    tally(&dir)
        .args(["add", "Coffee", "4.50", "--date", "2024-02-30"])
        .assert()
        .failure();

    // Rejected with an error message, never a crash
    tally(&dir)
        .args(["add", "Coffee", "1.５0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    tally(&dir)
        .args(["add", "Coffee", "99999999999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    // None of the rejected inputs were recorded
    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet for this month."));
}

#[test]
fn delete_by_short_id() {
    let dir = TempDir::new().unwrap();

    let output = tally(&dir)
        .args(["add", "Coffee", "4.50"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let id = stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("ID: "))
        .expect("add output should include the expense ID")
        .to_string();

    tally(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted expense"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet for this month."));
}

#[test]
fn delete_unknown_id_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["delete", "exp-deadbeef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense found with ID:"));

    tally(&dir)
        .args(["delete", "not-an-id-at-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense found with ID:"));
}

#[test]
fn backdated_add_lands_in_history() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "Old book", "15", "--date", "2020-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already reflected in history"));

    tally(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2020"))
        .stdout(predicate::str::contains("$15.00"));

    // The backdated expense does not count toward the active month
    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet for this month."));
}

#[test]
fn history_starts_empty() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet."));
}

#[test]
fn clear_history_discards_archived_months() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "Old book", "15", "--date", "2020-01-15"])
        .assert()
        .success();

    tally(&dir)
        .args(["add", "Coffee", "4.50"])
        .assert()
        .success();

    tally(&dir)
        .args(["clear-history", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Monthly spending history has been cleared",
        ));

    tally(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet."));

    // Active-month expenses survive
    tally(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.50"));
}

#[test]
fn state_survives_restart() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "Coffee", "4.50"])
        .assert()
        .success();

    // Each invocation is a fresh process; totals come from disk
    tally(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.50"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));
}

#[test]
fn settings_change_rendered_output() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"currency_symbol":"€","date_format":"%d/%m/%Y"}"#,
    )
    .unwrap();

    tally(&dir)
        .args(["add", "Coffee", "4.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€4.50"))
        .stdout(predicate::str::contains("Total: €4.50"));

    tally(&dir)
        .arg("total")
        .assert()
        .success()
        .stdout(predicate::str::contains("€4.50"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}
