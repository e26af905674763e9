use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BIN_NAME: &str = "expenses";

fn ledger_command(base_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_LEDGER_DATA_DIR", base_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// A ledger directory that starts without sample data
fn empty_ledger() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("config.json"),
        r#"{ "seed_on_first_run": false, "currency_symbol": "€" }"#,
    )
    .expect("write settings");
    dir
}

fn added_id(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .find_map(|line| line.strip_prefix("Expense:"))
        .map(|id| id.trim().to_string())
        .expect("add prints the new id")
}

#[test]
fn cli_help_lists_commands() {
    let dir = empty_ledger();
    ledger_command(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("summary").and(contains("trend")));
}

#[test]
fn cli_first_run_starts_with_sample_data() {
    let dir = TempDir::new().expect("temp dir");
    ledger_command(dir.path())
        .args(["list", "--range", "all"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("Birthday gift")));

    assert!(dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn cli_add_list_and_summary() {
    let dir = empty_ledger();

    ledger_command(dir.path())
        .args(["add", "Lunch with team", "42.50", "--category", "food", "--method", "cash"])
        .assert()
        .success()
        .stdout(contains("Amount:      €42.50").and(contains("Paid by:     Cash")));

    ledger_command(dir.path())
        .args(["add", "Train ticket", "17.50", "-c", "Travel"])
        .assert()
        .success();

    ledger_command(dir.path())
        .args(["list", "--search", "LUNCH"])
        .assert()
        .success()
        .stdout(contains("Lunch with team").and(contains("Train ticket").not()));

    ledger_command(dir.path())
        .args(["summary", "--range", "7"])
        .assert()
        .success()
        .stdout(
            contains("Total:         €60.00")
                .and(contains("Top category:  Food (€42.50, 71%)"))
                .and(contains("Travel")),
        );
}

#[test]
fn cli_rejects_invalid_input() {
    let dir = empty_ledger();

    ledger_command(dir.path())
        .args(["add", "Snacks", "ten"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));

    ledger_command(dir.path())
        .args(["add", "Snacks", "0"])
        .assert()
        .failure()
        .stderr(contains("greater than zero"));

    ledger_command(dir.path())
        .args(["add", "Snacks", "99999999999999999999"])
        .assert()
        .failure()
        .stderr(contains("exceeds the maximum"));

    ledger_command(dir.path())
        .args(["add", "Snacks", "3", "--category", "Groceries"])
        .assert()
        .failure();

    ledger_command(dir.path())
        .args(["list", "--range", "14"])
        .assert()
        .failure();

    ledger_command(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn cli_delete_removes_expense() {
    let dir = empty_ledger();

    let output = ledger_command(dir.path())
        .args(["add", "Cinema", "12"])
        .output()
        .expect("run add");
    assert!(output.status.success());
    let id = added_id(&output.stdout);

    ledger_command(dir.path())
        .args(["delete", id.as_str()])
        .assert()
        .success()
        .stdout(contains("Deleted expense"));

    ledger_command(dir.path())
        .args(["delete", id.as_str()])
        .assert()
        .failure()
        .stderr(contains("not found"));

    ledger_command(dir.path())
        .args(["list", "--range", "all"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn cli_summary_exports_csv() {
    let dir = empty_ledger();
    let csv_path = dir.path().join("summary.csv");

    ledger_command(dir.path())
        .args(["add", "Rent", "900", "--category", "housing"])
        .assert()
        .success();
    ledger_command(dir.path())
        .args(["add", "Groceries", "100", "--category", "food"])
        .assert()
        .success();

    ledger_command(dir.path())
        .args(["summary", "--output"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Summary exported to"));

    let csv = fs::read_to_string(&csv_path).expect("csv written");
    assert_eq!(
        csv,
        "Category,Amount,Percentage\nHousing,900.00,90\nFood,100.00,10\nTOTAL,1000.00,\n"
    );
}

#[test]
fn cli_trend_shows_months() {
    let dir = empty_ledger();

    ledger_command(dir.path())
        .arg("trend")
        .assert()
        .success()
        .stdout(contains("No spending recorded yet."));

    ledger_command(dir.path())
        .args(["add", "Coffee", "3.20"])
        .assert()
        .success();

    ledger_command(dir.path())
        .arg("trend")
        .assert()
        .success()
        .stdout(contains("Monthly Trend").and(contains("€3.20")));
}

#[test]
fn cli_recovers_from_malformed_data() {
    let dir = TempDir::new().expect("temp dir");
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).expect("data dir");
    fs::write(data_dir.join("expenses.json"), "{ not json").expect("write data");

    ledger_command(dir.path())
        .args(["list", "--range", "all"])
        .assert()
        .success()
        .stdout(contains("Groceries"))
        .stderr(contains("unreadable"));
}

#[test]
fn cli_config_writes_default_settings() {
    let dir = TempDir::new().expect("temp dir");

    ledger_command(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Default time range: Last 30 days"));

    assert!(dir.path().join("config.json").exists());
}
