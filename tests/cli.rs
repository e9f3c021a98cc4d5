use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn expense_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_CLI_DATA_DIR", dir)
        .env_remove("EXPENSE_CLI_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn data_file(dir: &Path) -> PathBuf {
    dir.join("data.json")
}

fn stored(dir: &Path) -> Vec<Value> {
    let contents = fs::read_to_string(data_file(dir)).unwrap();
    serde_json::from_str(&contents).unwrap()
}

fn stored_ids(dir: &Path) -> Vec<u64> {
    stored(dir).iter().map(|e| e["id"].as_u64().unwrap()).collect()
}

fn add(dir: &Path, description: &str, amount: &str) {
    expense_cmd(dir)
        .args(["add", "--description", description, "--amount", amount])
        .assert()
        .success();
}

#[test]
fn add_then_list_shows_the_expense() {
    let temp = TempDir::new().unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    expense_cmd(temp.path())
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");

    expense_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(
            contains("ID")
                .and(contains("Lunch"))
                .and(contains("$20"))
                .and(contains(today.as_str())),
        );

    let expenses = stored(temp.path());
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["id"], 1);
    assert_eq!(expenses[0]["description"], "Lunch");
    assert_eq!(expenses[0]["date"], today.as_str());
}

#[test]
fn list_on_empty_store() {
    let temp = TempDir::new().unwrap();

    expense_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No expenses found.\n");

    assert_eq!(fs::read_to_string(data_file(temp.path())).unwrap(), "[]");
}

#[test]
fn delete_removes_only_that_expense() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "First", "1");
    add(temp.path(), "Second", "2");
    add(temp.path(), "Third", "3");

    expense_cmd(temp.path())
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout("Expense deleted successfully\n");

    assert_eq!(stored_ids(temp.path()), vec![1, 3]);

    expense_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("First").and(contains("Third")).and(contains("Second").not()));
}

#[test]
fn delete_unknown_or_malformed_id() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Only", "1");

    expense_cmd(temp.path())
        .args(["delete", "--id", "9"])
        .assert()
        .success()
        .stdout("Error: Expense with ID 9 not found.\n");

    expense_cmd(temp.path())
        .args(["delete", "--id", "nine"])
        .assert()
        .success()
        .stdout("Error: ID must be a number.\n");

    expense_cmd(temp.path())
        .args(["delete", "--id", "1abc"])
        .assert()
        .success()
        .stdout("Error: ID must be a number.\n");

    assert_eq!(stored_ids(temp.path()), vec![1]);
}

#[test]
fn amount_with_trailing_junk_is_rejected() {
    let temp = TempDir::new().unwrap();

    expense_cmd(temp.path())
        .args(["add", "--description", "Lunch", "--amount", "20abc"])
        .assert()
        .success()
        .stdout("Error: Amount must be a positive number.\n");

    assert!(stored(temp.path()).is_empty());
}

#[test]
fn add_rejects_empty_description() {
    let temp = TempDir::new().unwrap();

    expense_cmd(temp.path())
        .args(["add", "--description", "", "--amount", "5"])
        .assert()
        .success()
        .stdout("Error: Description cannot be empty.\n");

    assert!(stored(temp.path()).is_empty());
}

#[test]
fn add_rejects_negative_amount() {
    let temp = TempDir::new().unwrap();

    expense_cmd(temp.path())
        .args(["add", "--description", "Coffee", "--amount", "-3"])
        .assert()
        .success()
        .stdout("Error: Amount must be a positive number.\n");

    expense_cmd(temp.path())
        .args(["add", "--description", "Coffee", "--amount", "lots"])
        .assert()
        .success()
        .stdout("Error: Amount must be a positive number.\n");

    assert!(stored(temp.path()).is_empty());
}

#[test]
fn update_changes_only_supplied_fields() {
    let temp = TempDir::new().unwrap();
    fs::write(
        data_file(temp.path()),
        r#"[{"id": 1, "date": "2023-06-01", "description": "Rent", "amount": 900}]"#,
    )
    .unwrap();

    expense_cmd(temp.path())
        .args(["update", "--id", "1", "--amount", "950"])
        .assert()
        .success()
        .stdout("Expense updated successfully (ID: 1)\n");

    let expenses = stored(temp.path());
    assert_eq!(expenses[0]["description"], "Rent");
    assert_eq!(expenses[0]["date"], "2023-06-01");
    assert_eq!(expenses[0]["amount"].as_f64(), Some(950.0));

    expense_cmd(temp.path())
        .args(["update", "--id", "1", "--description", "Mortgage"])
        .assert()
        .success();

    let expenses = stored(temp.path());
    assert_eq!(expenses[0]["description"], "Mortgage");
    assert_eq!(expenses[0]["date"], "2023-06-01");
    assert_eq!(expenses[0]["amount"].as_f64(), Some(950.0));
}

#[test]
fn update_with_blank_description_changes_nothing() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Rent", "900");

    expense_cmd(temp.path())
        .args(["update", "--id", "1", "--description", " ", "--amount", "5"])
        .assert()
        .success()
        .stdout("Error: Description cannot be empty.\n");

    let expenses = stored(temp.path());
    assert_eq!(expenses[0]["description"], "Rent");
    assert_eq!(expenses[0]["amount"].as_f64(), Some(900.0));
}

#[test]
fn update_unknown_id() {
    let temp = TempDir::new().unwrap();

    expense_cmd(temp.path())
        .args(["update", "--id", "4", "--amount", "5"])
        .assert()
        .success()
        .stdout("Error: Expense with ID 4 not found.\n");
}

#[test]
fn summary_totals() {
    let temp = TempDir::new().unwrap();
    fs::write(
        data_file(temp.path()),
        r#"[
  {"id": 1, "date": "2024-03-02", "description": "Books", "amount": 10},
  {"id": 2, "date": "2023-03-20", "description": "Lunch", "amount": 15},
  {"id": 3, "date": "2024-04-11", "description": "Bus", "amount": 5}
]"#,
    )
    .unwrap();

    expense_cmd(temp.path())
        .args(["summary", "--month", "3"])
        .assert()
        .success()
        .stdout("Total expenses for month 3: $25\n");

    expense_cmd(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $30\n");

    expense_cmd(temp.path())
        .args(["summary", "--month", "13"])
        .assert()
        .success()
        .stdout("Error: Month must be between 1 and 12.\n");
}

#[test]
fn corrupt_file_is_reset() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(temp.path()), "this is { not json").unwrap();

    expense_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(contains("corrupt"))
        .stdout("No expenses found.\n");

    assert_eq!(fs::read_to_string(data_file(temp.path())).unwrap(), "[]");
}

#[test]
fn non_utf8_file_is_reset() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(temp.path()), [0xff, 0xfe, 0x00, 0x41]).unwrap();

    expense_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(contains("corrupt"))
        .stdout("No expenses found.\n");

    assert_eq!(fs::read_to_string(data_file(temp.path())).unwrap(), "[]");
}

#[test]
fn blank_file_lists_empty_and_is_kept() {
    let temp = TempDir::new().unwrap();
    fs::write(data_file(temp.path()), "  \n").unwrap();

    expense_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stderr(contains("corrupt").not())
        .stdout("No expenses found.\n");

    assert_eq!(fs::read_to_string(data_file(temp.path())).unwrap(), "  \n");
}

#[test]
fn add_succeeds_when_audit_log_unwritable() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("audit.log")).unwrap();

    expense_cmd(temp.path())
        .args(["add", "--description", "Lunch", "--amount", "20"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");

    assert_eq!(stored_ids(temp.path()), vec![1]);
}

#[test]
fn file_flag_overrides_data_location() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("books").join("2024.json");

    expense_cmd(temp.path())
        .arg("--file")
        .arg(&custom)
        .args(["add", "--description", "Lunch", "--amount", "12.5"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!data_file(temp.path()).exists());
}

#[test]
fn history_records_mutations() {
    let temp = TempDir::new().unwrap();

    expense_cmd(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout("No history recorded.\n");

    add(temp.path(), "Lunch", "20");
    expense_cmd(temp.path())
        .args(["update", "--id", "1", "--amount", "22"])
        .assert()
        .success();
    expense_cmd(temp.path())
        .args(["delete", "--id", "1"])
        .assert()
        .success();

    expense_cmd(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(
            contains("CREATE Expense 1 (Lunch)")
                .and(contains("UPDATE Expense 1"))
                .and(contains("DELETE Expense 1")),
        );
}

#[test]
fn export_writes_csv() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Lunch", "20");
    let output = temp.path().join("out.csv");

    expense_cmd(temp.path())
        .arg("export")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Exported 1 expenses"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("id,date,description,amount\n"));
    assert!(csv.contains(",Lunch,20"));
}

#[test]
fn currency_symbol_comes_from_settings() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), r#"{"currency_symbol": "€"}"#).unwrap();
    add(temp.path(), "Lunch", "20");

    expense_cmd(temp.path())
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: €20\n");
}
