//! E2E tests for config file, environment defaults and logging.

use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

mod common;

use common::{pdate, pdate_with_config};

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn config_file_sets_format_and_language() {
    let file = config_file("[output]\nformat = \"{wd} {D}. {mn}\"\nlanguage = \"de\"\n");
    pdate_with_config(file.path())
        .args(["2025-10-02", "2025-10-02"])
        .assert()
        .success()
        .stdout("Don 2. Okt\n");
}

#[test]
fn cli_overrides_config_file() {
    let file = config_file("[output]\nformat = \"{D}\"\nlanguage = \"de\"\n");
    pdate_with_config(file.path())
        .args(["-f", "{MN}", "-l", "en", "2025-10-02", "2025-10-02"])
        .assert()
        .success()
        .stdout("October\n");
}

#[test]
fn env_overrides_config_file() {
    let file = config_file("[output]\nlanguage = \"de\"\n");
    pdate_with_config(file.path())
        .env("PDATE_LANG", "it")
        .env("PDATE_FORMAT", "{WD}")
        .args(["2025-10-02", "2025-10-02"])
        .assert()
        .success()
        .stdout("Giovedì\n");
}

#[test]
fn invalid_config_fails_with_config_exit_code() {
    let file = config_file("[output]\nlanguage = \"xx\"\n");
    pdate_with_config(file.path())
        .args(["2025-10-02"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("output.language"));
}

#[test]
fn malformed_config_does_not_panic() {
    let file = config_file("this is not toml {{");
    pdate_with_config(file.path())
        .args(["2025-10-02"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn help_ignores_broken_config() {
    let file = config_file("this is not toml {{");
    pdate_with_config(file.path())
        .arg("-h")
        .assert()
        .success();
}

#[test]
fn debug_logs_go_to_stderr() {
    pdate()
        .env("PDATE_LOG", "debug")
        .args(["2025-10-02", "2025-10-03"])
        .assert()
        .success()
        .stdout("2025-10-02\n2025-10-03\n")
        .stderr(predicate::str::contains("Classified arguments"));
}

#[test]
fn json_logs_are_json_lines() {
    let output = pdate()
        .args(["--log-level", "info", "--log-format", "json", "2025-10-02", "2025-10-03"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.is_empty());
    for line in stderr.lines() {
        assert!(line.starts_with('{') && line.ends_with('}'), "{line}");
    }
}

#[test]
fn log_file_receives_logs() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("pdate.log");
    pdate()
        .env("PDATE_LOG", "info")
        .env("PDATE_LOG_FILE", &log_path)
        .args(["2025-10-02", "2025-10-03"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    let logged = std::fs::read_to_string(&log_path).unwrap();
    assert!(logged.contains("Generated dates"));
}

#[test]
fn debug_logs_name_the_config_file() {
    let file = config_file("[output]\nlanguage = \"fr\"\n");
    let path = file.path().display().to_string();
    pdate_with_config(file.path())
        .env("PDATE_LOG", "debug")
        .args(["2025-10-02", "2025-10-02"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Read config file"))
        .stderr(predicate::str::contains(path));
}

#[test]
fn debug_logs_report_a_missing_config_file() {
    pdate()
        .env("PDATE_LOG", "debug")
        .args(["2025-10-02", "2025-10-02"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file not found"))
        .stderr(predicate::str::contains("/nonexistent/pdate/config.toml"));
}
