//! Integration tests for the `luach` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the subcommands
//! through the actual binary: JSON output shapes, location overrides, and the
//! error-as-data exit behavior the tool harness relies on.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: run `luach` with the given arguments and parse stdout as JSON.
fn run_json(args: &[&str]) -> serde_json::Value {
    let output = Command::cargo_bin("luach")
        .unwrap()
        .args(args)
        .output()
        .expect("luach should run");
    assert!(
        output.status.success(),
        "luach {:?} must succeed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// today subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn today_prints_rfc3339() {
    Command::cargo_bin("luach")
        .unwrap()
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z").unwrap());
}

// ─────────────────────────────────────────────────────────────────────────────
// convert subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn convert_defaults_to_gregorian_input() {
    Command::cargo_bin("luach")
        .unwrap()
        .args(["convert", "2024-10-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hebrewYear\": 5785"))
        .stdout(predicate::str::contains("1 Tishrei 5785"));
}

#[test]
fn convert_hebrew_to_gregorian() {
    let result = run_json(&["convert", "--from", "hebrew", "15 Nissan 5784"]);
    assert_eq!(result["gregorianDate"], "2024-04-23");
    assert_eq!(result["additionalInfo"]["dayOfWeek"], "Tuesday");
}

#[test]
fn convert_failure_is_data_not_exit_code() {
    // An unconvertible date is a conversational outcome, not a process error.
    Command::cargo_bin("luach")
        .unwrap()
        .args(["convert", "not-a-date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("Invalid civil date"));
}

#[test]
fn convert_rejects_unknown_calendar() {
    Command::cargo_bin("luach")
        .unwrap()
        .args(["convert", "2024-10-03", "--from", "julian"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─────────────────────────────────────────────────────────────────────────────
// find subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn find_passover_with_related_zmanim() {
    let result = run_json(&["find", "2024", "Passover"]);
    assert_eq!(result["found"], true);
    let holidays = result["holidays"].as_array().unwrap();
    assert!(holidays
        .iter()
        .any(|h| h["hebrewDate"].as_str().unwrap().contains("Nissan")));
    assert!(!result["relatedZmanim"].as_array().unwrap().is_empty());
}

#[test]
fn find_miss_reports_found_false() {
    let result = run_json(&["find", "2024", "Festivus"]);
    assert_eq!(result["found"], false);
    assert!(result["message"]
        .as_str()
        .unwrap()
        .contains("listJewishHolidays"));
}

#[test]
fn find_blank_name_reports_found_false() {
    let result = run_json(&["find", "2024", ""]);
    assert_eq!(result["found"], false);
}

#[test]
fn find_with_location_override() {
    let result = run_json(&[
        "find",
        "2024",
        "Passover",
        "--place",
        "Jerusalem",
        "--latitude",
        "31.7683",
        "--longitude",
        "35.2137",
        "--timezone",
        "Asia/Jerusalem",
    ]);
    assert_eq!(result["found"], true);
    assert_eq!(result["holidays"][0]["location"]["name"], "Jerusalem");
    assert_eq!(
        result["holidays"][0]["location"]["timezone"],
        "Asia/Jerusalem"
    );
}

#[test]
fn find_accepts_negative_coordinates() {
    // Western longitudes arrive as negative flag values.
    Command::cargo_bin("luach")
        .unwrap()
        .args(["find", "2024", "Chanukah", "--longitude", "-74.0060"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": true"));
}

#[test]
fn find_rejects_unknown_timezone() {
    Command::cargo_bin("luach")
        .unwrap()
        .args(["find", "2024", "Purim", "--timezone", "Mars/Olympus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown timezone"));
}

// ─────────────────────────────────────────────────────────────────────────────
// list subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_2024_holidays() {
    let result = run_json(&["list", "2024"]);
    assert_eq!(result["year"], 2024);
    let total = result["totalHolidays"].as_u64().unwrap();
    assert!(total > 0);
    assert_eq!(result["holidays"].as_array().unwrap().len() as u64, total);
}

#[test]
fn list_failure_is_data_not_exit_code() {
    Command::cargo_bin("luach")
        .unwrap()
        .args(["list", "10000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"error\""));
}

// ─────────────────────────────────────────────────────────────────────────────
// tools subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn tools_prints_the_catalog() {
    Command::cargo_bin("luach")
        .unwrap()
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("todaysDate"))
        .stdout(predicate::str::contains("convertDate"))
        .stdout(predicate::str::contains("findJewishHoliday"))
        .stdout(predicate::str::contains("listJewishHolidays"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Edge cases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    Command::cargo_bin("luach")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("today"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("tools"));
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("luach")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("unrecognized")));
}
