//! Usage-error behavior of the cpu binary.

use std::process::{Command, Output};

/// Runs the launcher with a scrubbed environment so ambient `CPU_*`
/// variables cannot leak into the assertions.
fn run_cpu(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cpu"))
        .args(args)
        .env_remove("CPU_REMOTE")
        .env_remove("CPU_SSH")
        .env_remove("CPU_SSH_ARGS")
        .output()
        .expect("failed to run cpu")
}

#[test]
fn missing_target_exits_with_the_usage_code() {
    let output = run_cpu(&["make"]);

    assert_eq!(output.status.code(), Some(64));
    assert!(output.stdout.is_empty(), "usage errors stay off stdout");

    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("missing remote machine"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn missing_command_exits_with_the_usage_code() {
    let output = run_cpu(&["-r", "box"]);

    assert_eq!(output.status.code(), Some(64));

    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("missing command"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn no_arguments_at_all_is_still_a_usage_error() {
    let output = run_cpu(&[]);

    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn help_lists_usage_on_stdout() {
    let output = run_cpu(&["--help"]);

    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("cpu"));
}

#[test]
fn version_reports_on_stdout() {
    let output = run_cpu(&["--version"]);

    assert!(output.status.success(), "--version should succeed");
    assert!(output.stderr.is_empty());
    assert!(!output.stdout.is_empty());
}
