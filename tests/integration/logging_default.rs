//! Integration tests for logging defaults and overrides.
//!
//! Logging stays silent unless asked for, so stdout carries only the
//! confirmation line.

use super::test_utils::{combine_command, write_tree};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_run_is_silent_on_stderr() {
    let sandbox = TempDir::new().unwrap();
    let workspace = sandbox.path().join("ws");
    write_tree(&workspace, &[("a.cpp", "int a;")]);

    let output = combine_command(sandbox.path(), &workspace).output().unwrap();

    assert!(output.status.success());
    assert!(
        output.stderr.is_empty(),
        "no logs expected by default: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let sandbox = TempDir::new().unwrap();
    let workspace = sandbox.path().join("ws");
    write_tree(&workspace, &[("a.cpp", "int a;")]);

    let output = combine_command(sandbox.path(), &workspace)
        .arg("--verbose")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Collecting source files"), "stderr={}", stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_json_logs_to_file() {
    let sandbox = TempDir::new().unwrap();
    let workspace = sandbox.path().join("ws");
    write_tree(&workspace, &[("a.cpp", "int a;")]);
    let log_file = sandbox.path().join("logs").join("run.log");

    let output = combine_command(sandbox.path(), &workspace)
        .args(["--log-level", "info", "--log-format", "json", "--log-output", "file"])
        .arg("--log-file")
        .arg(&log_file)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let content = fs::read_to_string(&log_file).unwrap();
    let first = content.lines().next().unwrap_or("");
    assert!(first.starts_with('{'), "expected JSON log line, got: {}", first);
    assert!(content.contains("Collection complete"));
}
