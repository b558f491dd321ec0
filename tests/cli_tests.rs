//! CLI Integration Tests
//!
//! Runs the otrs-import binary with assert_cmd.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::{scenario_workbook, write_workbook};
use predicates::prelude::*;
use tempfile::TempDir;

fn otrs_import() -> Command {
    let mut cmd = Command::cargo_bin("otrs-import").unwrap();
    cmd.env_remove("OTRS_IMPORT_PERL")
        .env_remove("OTRS_IMPORT_CONSOLE")
        .env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    otrs_import()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("otrs-import"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    otrs_import()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("otrs-import"));
}

#[test]
fn test_import_help_lists_kind_flags() {
    otrs_import()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--customer-user"))
        .stdout(predicate::str::contains("--dry-run"));
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORT COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_dry_run_prints_commands() {
    let dir = TempDir::new().unwrap();
    let path = scenario_workbook(&dir);

    otrs_import()
        .args(["import", "--dry-run"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/usr/bin/perl /opt/otrs/bin/otrs.Console.pl Admin::User::Add --name Alice --email a@x.com",
        ))
        .stdout(predicate::str::contains(
            "Admin::ITSM::ConfigItem::Add --class Server --name Srv1 --attribute Purchased=2024-06-01",
        ))
        .stdout(predicate::str::contains("Dry run complete"));
}

#[test]
fn test_import_kind_flag_limits_output() {
    let dir = TempDir::new().unwrap();
    let path = scenario_workbook(&dir);

    otrs_import()
        .args(["import", "-n", "--ci", "--dump-format", "none"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin::ITSM::ConfigItem::Add"))
        .stdout(predicate::str::contains("Admin::User::Add").not());
}

#[test]
fn test_import_runs_console_with_argument_list() {
    let dir = TempDir::new().unwrap();
    let path = scenario_workbook(&dir);

    // `echo` stands in for perl: it prints the argv it was given
    otrs_import()
        .args(["import", "--agent", "--perl", "echo", "--console", "otrs.Console.pl"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "echo otrs.Console.pl Admin::User::Add --name Alice --email a@x.com",
        ))
        .stdout(predicate::str::contains(
            "\notrs.Console.pl Admin::User::Add --name Alice --email a@x.com\n",
        ))
        .stdout(predicate::str::contains("Import complete"));
}

#[test]
fn test_import_console_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = scenario_workbook(&dir);

    otrs_import()
        .env("OTRS_IMPORT_PERL", "/opt/perl5/bin/perl")
        .env("OTRS_IMPORT_CONSOLE", "/opt/znuny/bin/otrs.Console.pl")
        .args(["import", "--dry-run", "--agent"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/opt/perl5/bin/perl /opt/znuny/bin/otrs.Console.pl Admin::User::Add",
        ));
}

#[test]
fn test_import_missing_console_keeps_going() {
    let dir = TempDir::new().unwrap();
    let path = scenario_workbook(&dir);

    otrs_import()
        .args(["import", "--perl", "/nonexistent/otrs-import/perl"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin::User::Add --name Alice"))
        .stdout(predicate::str::contains("Admin::ITSM::ConfigItem::Add --class Server"))
        .stdout(predicate::str::contains("2 failed commands"))
        .stderr(predicate::str::contains("failed to run"));
}

#[test]
fn test_import_missing_workbook_fails() {
    otrs_import()
        .args(["import", "--dry-run", "no-such-workbook.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_import_bad_date_fails_without_later_commands() {
    let dir = TempDir::new().unwrap();
    let path = write_workbook(
        &dir,
        &[
            ("ci - Server", vec![vec!["name", "attrDate-Purchased"], vec!["Srv1", "not-a-date"]]),
            ("ci - Printer", vec![vec!["name"], vec!["Prn1"]]),
        ],
    );

    otrs_import()
        .args(["import", "--dry-run", "--dump-format", "none"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse date"))
        .stdout(predicate::str::contains("--name Prn1").not());
}

// ═══════════════════════════════════════════════════════════════════════════
// DUMP COMMAND TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_dump_yaml() {
    let dir = TempDir::new().unwrap();
    let path = scenario_workbook(&dir);

    otrs_import()
        .arg("dump")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Alice"))
        .stdout(predicate::str::contains("class: Server"));
}

#[test]
fn test_dump_json() {
    let dir = TempDir::new().unwrap();
    let path = scenario_workbook(&dir);

    let output = otrs_import()
        .args(["dump", "--format", "json"])
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["agent"][0]["name"], "Alice");
    assert_eq!(value["ci"][0]["attrDate-Purchased"], "June 1 2024");
}
