use std::path::Path;
use std::process::{Command, Output};

fn roster(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roster"))
        .arg("--db")
        .arg(db)
        .args(args)
        .env_remove("ROSTER_LOG_DIR")
        .env_remove("ROSTER_LOG_LEVEL")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn migrate_reports_latest_schema_version() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    let output = roster(&db, &["migrate"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("schema_version=3 latest=3"));
    assert!(db.exists());
}

#[test]
fn seeded_example_city_resolves_to_its_state() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    assert!(roster(&db, &["location", "seed-example"]).status.success());
    let again = roster(&db, &["location", "seed-example"]);
    assert!(stdout(&again).contains("already present"));

    let output = roster(&db, &["location", "resolve", "100"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("city=100 name=Pune City"));
    assert!(text.contains("district=10 name=Pune"));
    assert!(text.contains("state=1 name=Maharashtra"));
}

#[test]
fn resolving_unknown_city_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    let output = roster(&db, &["location", "resolve", "404"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("city 404 not found"));
}

#[test]
fn withdrawing_missing_student_fails() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    assert!(roster(&db, &["students", "list"]).status.success());
    let output = roster(&db, &["students", "withdraw", "5"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("students row not found: 5"));
}

#[test]
fn log_level_without_log_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    let output = roster(&db, &["--log-level", "debug", "ping"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--log-dir"));
}

#[test]
fn payroll_slip_prints_rounded_totals() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("roster.db");

    let output = roster(
        &db,
        &[
            "payroll",
            "slip",
            "--salary",
            "20000",
            "--overtime-days",
            "2",
            "--overtime-rate",
            "750",
            "--leave-taken",
            "1",
            "--leave-deduction",
            "500.5",
            "--bonus",
            "1000",
        ],
    );
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("overtime=1500.00"));
    assert!(text.contains("leave_deduction=500.50"));
    assert!(text.contains("paid=21999.50"));
}
