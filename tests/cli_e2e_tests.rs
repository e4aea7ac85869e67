//! End-to-end tests for the pk binary
//!
//! These tests run the installed binary against piped input and files and
//! check the exact output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pk() -> Command {
    let mut cmd = Command::cargo_bin("pk").unwrap();
    cmd.env_remove("PK_EXCLUDES")
        .env_remove("FIELDX_EXCLUDES")
        .env("PK_CONFIG", "/nonexistent/pk/config.json");
    cmd
}

#[test]
fn test_smoke_full_range_echoes_input() {
    pk().arg("..")
        .write_stdin("1 2\n")
        .assert()
        .success()
        .stdout("1 2\n");
}

#[test]
fn test_cli_version_output() {
    pk().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pk 1.0.2"));
}

#[test]
fn test_cli_help_lists_options() {
    pk().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("A field extraction utility"))
        .stdout(predicate::str::contains("--delimiters"))
        .stdout(predicate::str::contains("--separator"))
        .stdout(predicate::str::contains("FIELD"));
}

#[test]
fn test_missing_fields_is_usage_error() {
    pk().write_stdin("a b\n").assert().failure().code(2);
}

#[test]
fn test_reorder_fields() {
    pk().args(["3", "1"])
        .write_stdin("a b c\nd e f\n")
        .assert()
        .success()
        .stdout("c a\nf d\n");
}

#[test]
fn test_missing_field_prints_null() {
    pk().args(["1", "5"])
        .write_stdin("a b\n")
        .assert()
        .success()
        .stdout("a NULL\n");
}

#[test]
fn test_empty_fields_with_custom_delimiter() {
    pk().args(["-e", "-d", ",", "1.."])
        .write_stdin("a,,b\n")
        .assert()
        .success()
        .stdout("a NULL b\n");
}

#[test]
fn test_bare_null_flag_omits_empty_fields() {
    pk().args(["-n", "1", "5"])
        .write_stdin("a b\n")
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn test_null_text_and_separator() {
    pk().args(["--null=?", "-s", "\\t", "2", "1", "4"])
        .write_stdin("x y\n")
        .assert()
        .success()
        .stdout("y\tx\t?\n");
}

#[test]
fn test_literal_fields() {
    pk().args(["-d", ":", "1", "=>", "7"])
        .write_stdin("root:x:0:0:root:/root:/bin/bash\n")
        .assert()
        .success()
        .stdout("root => /bin/bash\n");
}

#[test]
fn test_options_after_first_field_are_fields() {
    pk().args(["1", "-s"])
        .write_stdin("a\n")
        .assert()
        .success()
        .stdout("a -s\n");
}

#[test]
fn test_trim_and_backslash() {
    pk().args(["-t", "1", "2"])
        .write_stdin("(one), [two]\n")
        .assert()
        .success()
        .stdout("one two\n");

    pk().args(["-b", "1"])
        .write_stdin("a\\ b c\n")
        .assert()
        .success()
        .stdout("a b\n");
}

#[test]
fn test_excludes_flag() {
    pk().args(["--excludes=\":'", ".."])
        .write_stdin("\"a\" 'b'\n")
        .assert()
        .success()
        .stdout("a b\n");
}

#[test]
fn test_excludes_from_environment() {
    pk().env("PK_EXCLUDES", "-")
        .arg("..")
        .write_stdin("a-b c--d\n")
        .assert()
        .success()
        .stdout("ab cd\n");
}

#[test]
fn test_legacy_excludes_variable() {
    pk().env("FIELDX_EXCLUDES", "x")
        .arg("1")
        .write_stdin("axe\n")
        .assert()
        .success()
        .stdout("ae\n");
}

#[test]
fn test_bare_excludes_flag_clears_environment() {
    pk().env("PK_EXCLUDES", "-")
        .args(["-E", "1"])
        .write_stdin("a-b\n")
        .assert()
        .success()
        .stdout("a-b\n");
}

#[test]
fn test_read_from_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "k1 v1\nk2 v2\n").unwrap();

    pk().arg("-f")
        .arg(&input)
        .arg("2")
        .assert()
        .success()
        .stdout("v1\nv2\n");
}

#[test]
fn test_missing_input_file_fails() {
    pk().args(["-f", "/nonexistent/pk-input.txt", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("open input file"))
        .stderr(predicate::str::contains("/nonexistent/pk-input.txt"));
}

#[test]
fn test_zero_position_rejected() {
    pk().arg("0")
        .write_stdin("a\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("field positions start at 1"));
}

#[test]
fn test_empty_input_produces_no_output() {
    pk().arg("1").write_stdin("").assert().success().stdout("");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    pk().args(["-v", ".."])
        .env_remove("RUST_LOG")
        .write_stdin("1 2\n")
        .assert()
        .success()
        .stdout("1 2\n")
        .stderr(predicate::str::contains("Resolved settings"));
}
