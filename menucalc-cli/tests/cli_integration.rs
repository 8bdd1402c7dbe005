//! Integration tests for the menucalc CLI
//!
//! Each test scripts a whole session on stdin and checks the transcript.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn menucalc() -> Command {
    let mut cmd = Command::cargo_bin("menucalc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_exit_with_success() {
    menucalc()
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Operations:"))
        .stdout(predicate::str::contains("7. Exit"))
        .stdout(predicate::str::ends_with(
            "Thank you for using the calculator!\n",
        ));
}

#[test]
fn test_addition() {
    menucalc()
        .write_stdin("1\n2.5\n4\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Addition ==="))
        .stdout(predicate::str::contains(
            "Result: 2.500000 + 4.000000 = 6.500000",
        ))
        .stdout(predicate::str::contains("Press Enter to continue..."));
}

#[test]
fn test_every_operation() {
    let script = "1\n1\n2\n\n2\n1\n2\n\n3\n1.5\n2\n\n4\n1\n8\n\n5\n2\n8\n\n6\n81\n\n7\n";

    menucalc()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 1.000000 + 2.000000 = 3.000000"))
        .stdout(predicate::str::contains("Result: 1.000000 - 2.000000 = -1.000000"))
        .stdout(predicate::str::contains("Result: 1.500000 * 2.000000 = 3.000000"))
        .stdout(predicate::str::contains("Result: 1.000000 / 8.000000 = 0.125000"))
        .stdout(predicate::str::contains("Result: 2.000000^8.000000 = 256.000000"))
        .stdout(predicate::str::contains("Result: sqrt(81.000000) = 9.000000"));
}

#[test]
fn test_out_of_range_selector() {
    menucalc()
        .write_stdin("9\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Operation must be between 1 and 7",
        ));
}

#[test]
fn test_malformed_operand_abandons_operation() {
    menucalc()
        .write_stdin("3\nabc\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid number format"))
        .stdout(predicate::str::contains("Enter second number").not())
        .stdout(predicate::str::contains("Result:").not());
}

#[test]
fn test_domain_and_overflow_errors() {
    menucalc()
        .write_stdin("4\n5\n0\n\n5\n-2\n0.5\n\n1\n1.7e308\n1.7e308\n\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Division by zero is undefined"))
        .stdout(predicate::str::contains(
            "Error: Negative base with non-integer exponent",
        ))
        .stdout(predicate::str::contains("Error: Result would overflow"));
}

#[test]
fn test_end_of_input_fails() {
    menucalc()
        .write_stdin("1\n2\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Error: Failed to read input"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("menucalc.toml");
    fs::write(
        &config,
        "[display]\nshow_banner = false\npause_after_result = false\n",
    )
    .unwrap();

    menucalc()
        .arg("--config")
        .arg(&config)
        .write_stdin("6\n2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Available Operations:"))
        .stdout(predicate::str::contains("Result: sqrt(2.000000) = 1.414214"))
        .stdout(predicate::str::contains("Press Enter").not());
}

#[test]
fn test_missing_config_file() {
    menucalc()
        .arg("--config")
        .arg("nonexistent.toml")
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("menucalc.toml");
    fs::write(&config, "[input]\nmax_line_length = 0\n").unwrap();

    menucalc()
        .arg("-c")
        .arg(&config)
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_line_length must be positive"));
}

#[test]
fn test_logging_stays_off_stdout() {
    menucalc()
        .arg("-vvv")
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting calculator session").not());
}

#[test]
fn test_help() {
    menucalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--verbose"));
}
