use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn bin() -> Command {
    Command::cargo_bin("dream-schedule").expect("binary")
}

#[test]
fn help_works() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Generate milestone task dates"));
}

#[test]
fn subcommand_help_works() {
    for cmd in ["generate", "validate", "plan"] {
        bin().arg(cmd).arg("--help").assert().success();
    }
}

#[test]
fn generate_semi_weekly_json() {
    bin()
        .args([
            "generate",
            "--start",
            "2025-06-01",
            "--duration",
            "3w",
            "--recurrence",
            "semi-weekly",
        ])
        .assert()
        .success()
        .stdout(contains("\"date\": \"2025-06-04\""))
        .stdout(contains("\"date\": \"2025-06-18\""))
        .stdout(contains("\"endDate\": \"2025-06-21\""))
        .stdout(contains("2025-06-22").not());
}

#[test]
fn generate_unknown_recurrence_falls_back_to_daily() {
    bin()
        .args([
            "generate",
            "--start",
            "2025-06-01",
            "--duration",
            "3",
            "--recurrence",
            "fortnightly",
        ])
        .assert()
        .success()
        .stdout(contains("\"recurrence\": \"daily\""))
        .stdout(contains("\"date\": \"2025-06-02\""))
        .stdout(contains("\"date\": \"2025-06-03\""));
}

#[test]
fn generate_zero_duration_has_no_tasks() {
    bin()
        .args(["generate", "--start", "2025-06-01", "--duration", "0"])
        .assert()
        .success()
        .stdout(contains("\"tasks\": []"));
}

#[test]
fn generate_markdown() {
    bin()
        .args([
            "generate",
            "--start",
            "2025-01-31",
            "--duration",
            "3",
            "--unit",
            "months",
            "--recurrence",
            "monthly",
            "--format",
            "md",
            "--title",
            "Save money",
        ])
        .assert()
        .success()
        .stdout(contains("# Save money"))
        .stdout(contains("1. Task 1 (2025-02-28 Fri)"))
        .stdout(contains("2. Task 2 (2025-03-31 Mon)"));
}

#[test]
fn validate_reports_every_error() {
    let body = format!(
        r#"{{"title": "{}", "durationUnit": "decades", "startDate": "2000-01-01"}}"#,
        "x".repeat(25)
    );
    bin()
        .arg("validate")
        .write_stdin(body)
        .assert()
        .code(2)
        .stdout(contains("\"valid\": false"))
        .stdout(contains("Title must be 24 characters or less"))
        .stdout(contains("Duration unit must be one of"))
        .stdout(contains("Start date cannot be in the past"));
}

#[test]
fn validate_accepts_good_body() {
    bin()
        .arg("validate")
        .write_stdin(r#"{"title": "Read more", "duration": 2, "recurrence": "weekly"}"#)
        .assert()
        .success()
        .stdout(contains("\"valid\": true"));
}

#[test]
fn plan_renders_titles() {
    let body = r#"{
        "title": "Read more",
        "startDate": "2099-01-01",
        "duration": 1,
        "durationUnit": "months",
        "recurrence": "semi-monthly",
        "taskTitles": ["Pick a book"]
    }"#;
    bin()
        .args(["plan", "--format", "md"])
        .write_stdin(body)
        .assert()
        .success()
        .stdout(contains("# Read more"))
        .stdout(contains("1. Pick a book (2099-01-16 Fri)"))
        .stdout(contains("2. Task 2 (2099-02-01 Sun)").not());
}

#[test]
fn plan_rejects_non_string_task_titles() {
    bin()
        .arg("plan")
        .write_stdin(r#"{"title": "Swim", "duration": 3, "taskTitles": [1, 2]}"#)
        .assert()
        .code(2)
        .stdout(contains("\"valid\": false"))
        .stdout(contains("Task titles must be an array of strings"));
}

#[test]
fn plan_accepts_whole_float_duration() {
    bin()
        .arg("plan")
        .write_stdin(r#"{"title": "Swim", "duration": 3.0, "startDate": "2099-01-01"}"#)
        .assert()
        .success()
        .stdout(contains("\"endDate\": \"2099-01-03\""))
        .stdout(contains("Task 2"));
}

#[test]
fn invalid_json_is_failure() {
    bin()
        .arg("validate")
        .write_stdin("{not json")
        .assert()
        .code(1)
        .stderr(contains("JSON error"));
}

#[test]
fn bad_timezone_is_user_error() {
    bin()
        .args(["--tz", "Mars/Olympus", "generate", "--duration", "3"])
        .assert()
        .code(2)
        .stderr(contains("Invalid timezone"));
}
