//! Integration tests for the `ohfmt` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the render,
//! groups and months subcommands through the actual binary, including
//! stdin/stdout piping, file I/O and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the shop.json fixture.
fn shop_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/shop.json")
}

const SHOP_RENDERED: &str =
    r#"Mo-Fr 09:00-18:00; Sa 10:00-14:00, Sa 15:00-17:00; PH,Su off || "by appointment""#;

// ─────────────────────────────────────────────────────────────────────────────
// Render subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn render_file_to_stdout() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["render", "-i", shop_json_path()])
        .assert()
        .success()
        .stdout(format!("{}\n", SHOP_RENDERED));
}

#[test]
fn render_stdin_to_stdout() {
    let input = r#"[{"days":[{"start":"Mo"}],"times":[{"start":480,"end":720}]},{"kind":"fallback","modifier":"closed"}]"#;

    Command::cargo_bin("ohfmt")
        .unwrap()
        .arg("render")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("Mo 08:00-12:00 || closed\n");
}

#[test]
fn render_debug_annotates_rules() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["render", "--debug", "-i", shop_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("days[Mo-Fr] times[09:00-18:00]; "))
        .stdout(predicate::str::contains(
            "; holidays[PH] days[Su] modifier[off] || kind[fallback] comment[\"by appointment\"]",
        ));
}

#[test]
fn render_to_output_file() {
    let dir = std::env::temp_dir().join(format!("ohfmt-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("rendered.txt");

    Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["render", "-i", shop_json_path(), "-o"])
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, SHOP_RENDERED);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn render_empty_list_prints_empty_line() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .arg("render")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Groups subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn groups_one_line_per_group() {
    // The normal weekday rules and the empty rule share everything outside
    // days and times; the additive, holiday and fallback rules each found
    // their own group.
    let expected = [
        "Mo-Fr 09:00-18:00; Sa 10:00-14:00",
        "Sa 15:00-17:00",
        "PH,Su off",
        "\"by appointment\"",
    ]
    .join("\n");

    Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["groups", "-i", shop_json_path()])
        .assert()
        .success()
        .stdout(format!("{}\n", expected));
}

#[test]
fn groups_as_json() {
    let output = Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["groups", "--json", "-i", shop_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = value.as_array().expect("groups must be a JSON array");
    let sizes: Vec<usize> = groups
        .iter()
        .map(|g| g.as_array().map(Vec::len).unwrap_or(0))
        .collect();
    assert_eq!(sizes, vec![3, 1, 1, 1]);
    assert_eq!(groups[0][1]["days"][0]["start"], "Sa");
}

#[test]
fn groups_debug_and_json_conflict() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["groups", "--debug", "--json", "-i", shop_json_path()])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Months subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn months_lists_calendar_order() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .arg("months")
        .assert()
        .success()
        .stdout("Jan Feb Mar Apr May Jun Jul Aug Sep Oct Nov Dec\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_json_fails() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .arg("render")
        .write_stdin("[{\"days\": ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load rules from JSON"));
}

#[test]
fn unknown_weekday_fails() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .arg("groups")
        .write_stdin(r#"[{"days":[{"start":"Funday"}]}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid weekday"));
}

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["render", "-i", "/nonexistent/rules.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn no_subcommand_shows_usage() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    Command::cargo_bin("ohfmt")
        .unwrap()
        .args(["-vv", "render", "-i", shop_json_path()])
        .assert()
        .success()
        .stdout(format!("{}\n", SHOP_RENDERED))
        .stderr(predicate::str::contains("Loaded 6 rules"));
}
