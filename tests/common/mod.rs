//! Shared helpers for pdate integration tests.
#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

/// Variables that change pdate's behavior and must not leak in from the
/// developer's shell.
const PDATE_VARS: &[&str] = &[
    "PDATE_FORMAT",
    "PDATE_LANG",
    "PDATE_LOG",
    "PDATE_LOG_FORMAT",
    "PDATE_LOG_FILE",
    "RUST_LOG",
];

/// A `pdate` command with a clean environment and no config file.
#[allow(deprecated)]
pub fn pdate() -> Command {
    let mut cmd = Command::cargo_bin("pdate").unwrap();
    for var in PDATE_VARS {
        cmd.env_remove(var);
    }
    cmd.env("PDATE_CONFIG", "/nonexistent/pdate/config.toml");
    cmd
}

/// A `pdate` command reading its config from `path`.
pub fn pdate_with_config(path: &Path) -> Command {
    let mut cmd = pdate();
    cmd.env("PDATE_CONFIG", path);
    cmd
}

/// Stdout split into lines.
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
