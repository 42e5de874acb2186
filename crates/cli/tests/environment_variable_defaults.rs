//! Tests for environment variable influence on argument defaults.
//!
//! Validates that `CPU_REMOTE` and `SHELL` supply defaults when the matching
//! flag is absent, and that `CPU_SSH`/`CPU_SSH_ARGS` shape the transport
//! configuration.

use cpu_cli::test_utils::{TransportConfig, parse_args};
use serial_test::serial;
use std::env;

// Helper to ensure environment cleanup even if tests panic
struct EnvGuard {
    key: &'static str,
    old_value: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = env::var_os(key);
        // SAFETY: Tests touching the environment are serialised, so no other
        // thread reads this variable concurrently.
        unsafe {
            env::set_var(key, value);
        }
        Self { key, old_value }
    }

    fn remove(key: &'static str) -> Self {
        let old_value = env::var_os(key);
        // SAFETY: Tests touching the environment are serialised, so no other
        // thread reads this variable concurrently.
        unsafe {
            env::remove_var(key);
        }
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: Serialised test cleanup, same reasoning as above.
        unsafe {
            match &self.old_value {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

// ============================================================================
// CPU_REMOTE Environment Variable
// ============================================================================

#[test]
#[serial]
fn cpu_remote_env_supplies_the_default_target() {
    let _guard = EnvGuard::set("CPU_REMOTE", "buildbox:/srv");
    let args = parse_args(["cpu", "make"]).unwrap();

    assert_eq!(
        args.remote.as_deref(),
        Some("buildbox:/srv"),
        "CPU_REMOTE should stand in for a missing -r"
    );
}

#[test]
#[serial]
fn remote_flag_overrides_cpu_remote_env() {
    let _guard = EnvGuard::set("CPU_REMOTE", "envbox");
    let args = parse_args(["cpu", "-r", "flagbox", "make"]).unwrap();

    assert_eq!(
        args.remote.as_deref(),
        Some("flagbox"),
        "-r should win over CPU_REMOTE"
    );
}

#[test]
#[serial]
fn explicit_empty_remote_flag_ignores_the_env_default() {
    let _guard = EnvGuard::set("CPU_REMOTE", "envbox");
    let args = parse_args(["cpu", "-r", "", "make"]).unwrap();

    assert_eq!(
        args.remote, None,
        "an explicitly empty -r is a missing target, not a fallback to the env"
    );
}

#[test]
#[serial]
fn empty_cpu_remote_env_counts_as_unset() {
    let _guard = EnvGuard::set("CPU_REMOTE", "");
    let args = parse_args(["cpu", "make"]).unwrap();

    assert_eq!(args.remote, None);
}

#[test]
#[serial]
fn missing_cpu_remote_env_leaves_no_target() {
    let _guard = EnvGuard::remove("CPU_REMOTE");
    let args = parse_args(["cpu", "make"]).unwrap();

    assert_eq!(args.remote, None);
}

// ============================================================================
// SHELL Environment Variable
// ============================================================================

#[test]
#[serial]
fn shell_env_supplies_the_default_shell() {
    let _guard = EnvGuard::set("SHELL", "/bin/bash");
    let args = parse_args(["cpu", "-r", "box", "make"]).unwrap();

    assert_eq!(args.shell, "/bin/bash");
}

#[test]
#[serial]
fn shell_flag_overrides_shell_env() {
    let _guard = EnvGuard::set("SHELL", "/bin/bash");
    let args = parse_args(["cpu", "-r", "box", "-s", "/bin/zsh", "make"]).unwrap();

    assert_eq!(args.shell, "/bin/zsh");
}

#[test]
#[serial]
fn missing_shell_env_leaves_the_shell_empty() {
    let _guard = EnvGuard::remove("SHELL");
    let args = parse_args(["cpu", "-r", "box", "make"]).unwrap();

    assert_eq!(args.shell, "");
}

// ============================================================================
// CPU_SSH / CPU_SSH_ARGS Environment Variables
// ============================================================================

#[test]
#[serial]
fn transport_program_defaults_to_ssh() {
    let _guard = EnvGuard::remove("CPU_SSH");
    let config = TransportConfig::from_env();

    assert_eq!(config.program, "ssh");
}

#[test]
#[serial]
fn cpu_ssh_env_overrides_the_transport_program() {
    let _guard = EnvGuard::set("CPU_SSH", "/usr/local/bin/ssh-wrapper");
    let config = TransportConfig::from_env();

    assert_eq!(config.program, "/usr/local/bin/ssh-wrapper");
}

#[test]
#[serial]
fn unset_cpu_ssh_args_keeps_the_default_policy_flags() {
    let _guard = EnvGuard::remove("CPU_SSH_ARGS");
    let config = TransportConfig::from_env();

    assert_eq!(config.policy_override, None);
}

#[test]
#[serial]
fn cpu_ssh_args_tokens_replace_the_policy_flags() {
    let _guard = EnvGuard::set("CPU_SSH_ARGS", "-4  -o ConnectTimeout=5");
    let config = TransportConfig::from_env();

    assert_eq!(
        config.policy_override.as_deref(),
        Some(["-4", "-o", "ConnectTimeout=5"].map(String::from).as_slice()),
        "tokens split on whitespace, runs collapsed"
    );
}

#[test]
#[serial]
fn whitespace_only_cpu_ssh_args_still_overrides() {
    let _guard = EnvGuard::set("CPU_SSH_ARGS", "   ");
    let config = TransportConfig::from_env();

    assert_eq!(
        config.policy_override.as_deref(),
        Some(&[][..]),
        "a set but blank override suppresses the default flags entirely"
    );
}
