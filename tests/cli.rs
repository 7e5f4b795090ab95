use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendscope(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendscope").unwrap();
    cmd.env("SPENDSCOPE_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    spendscope(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    dir
}

fn add(dir: &TempDir, kind: &str, amount: &str, category: &str, description: &str, date: &str) {
    spendscope(dir)
        .args(["transaction", "add", kind, amount, category])
        .args(["--description", description, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction:"));
}

fn seed_january(dir: &TempDir) {
    add(dir, "income", "100", "Salary", "Paycheck", "2024-01-05");
    add(dir, "expense", "40", "Food & Dining", "Groceries", "2024-01-12");
    spendscope(dir)
        .args(["budget", "set", "Food & Dining", "50", "--month", "2024-01"])
        .assert()
        .success();
}

#[test]
fn init_creates_data_files() {
    let dir = initialized();
    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("transactions.json").exists());
    assert!(dir.path().join("data").join("budgets.json").exists());
}

#[test]
fn config_shows_paths() {
    let dir = initialized();
    spendscope(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trend months:     6"))
        .stdout(predicate::str::contains("Initialized:       true"));
}

#[test]
fn category_list_filters_by_type() {
    let dir = TempDir::new().unwrap();
    spendscope(&dir)
        .args(["category", "list", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Housing").not());
}

#[test]
fn insights_report_compares_budget_and_spending() {
    let dir = initialized();
    seed_january(&dir);

    spendscope(&dir)
        .args(["report", "insights", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending Insights for 2024-01"))
        .stdout(predicate::str::contains("Food & Dining"))
        .stdout(predicate::str::contains("-$10.00"))
        .stdout(predicate::str::contains("Under"))
        .stdout(predicate::str::contains("Total under: $10.00"));
}

#[test]
fn insights_report_exports_csv() {
    let dir = initialized();
    seed_january(&dir);
    let out = dir.path().join("insights.csv");

    spendscope(&dir)
        .args(["report", "insights", "--month", "2024-01", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Insights exported to:"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Month,Category,Budget,Actual,Delta,Status"));
    assert!(csv.contains("2024-01,Food & Dining,50.00,40.00,-10.00,Under"));
}

#[test]
fn empty_month_has_no_insights() {
    let dir = initialized();
    spendscope(&dir)
        .args(["report", "insights", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No budgets or spending for this month."));
}

#[test]
fn trend_and_breakdown_reports() {
    let dir = initialized();
    seed_january(&dir);

    spendscope(&dir)
        .args(["report", "trend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan 2024"))
        .stdout(predicate::str::contains("$60.00"));

    spendscope(&dir)
        .args(["report", "breakdown", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses by Category"))
        .stdout(predicate::str::contains("100.0%"));
}

#[test]
fn summary_report_all_time() {
    let dir = initialized();
    seed_january(&dir);

    spendscope(&dir)
        .args(["report", "summary", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Financial Overview (All Time)"))
        .stdout(predicate::str::contains("$60.00"))
        .stdout(predicate::str::contains("Paycheck"));
}

#[test]
fn budget_set_twice_replaces_amount() {
    let dir = initialized();
    for amount in ["50", "75"] {
        spendscope(&dir)
            .args(["budget", "set", "Travel", amount, "--month", "2024-02"])
            .assert()
            .success();
    }

    spendscope(&dir)
        .args(["budget", "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$75.00"))
        .stdout(predicate::str::contains("$50.00").not());
}

#[test]
fn unregistered_budget_category_warns() {
    let dir = initialized();
    spendscope(&dir)
        .args(["budget", "set", "Pets", "20", "--month", "2024-01"])
        .assert()
        .success()
        .stderr(predicate::str::contains("outside the registry"));
}

#[test]
fn rejects_category_of_the_wrong_type() {
    let dir = initialized();
    spendscope(&dir)
        .args(["transaction", "add", "expense", "10", "Salary"])
        .args(["--description", "Oops", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    spendscope(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn output_follows_currency_and_date_settings() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"currency_symbol": "€", "date_format": "%d/%m/%Y"}"#,
    )
    .unwrap();
    seed_january(&dir);

    spendscope(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:  €"));

    spendscope(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12/01/2024"))
        .stdout(predicate::str::contains("-€40.00"))
        .stdout(predicate::str::contains("$").not());

    spendscope(&dir)
        .args(["report", "insights", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total under: €10.00"));
}

#[test]
fn rejects_amount_beyond_supported_range() {
    let dir = initialized();
    spendscope(&dir)
        .args(["transaction", "add", "expense", "100000000000000000", "Travel"])
        .args(["--description", "Too much", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the supported range"));
}

#[test]
fn rejects_malformed_month() {
    let dir = initialized();
    spendscope(&dir)
        .args(["report", "insights", "--month", "2024-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}
