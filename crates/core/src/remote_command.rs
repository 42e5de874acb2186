//! Remote command assembly.
//!
//! Combines the mapped remote path, the forwarded environment slice, and a
//! shell-aware wrapping of the user's command into the single string handed
//! to the remote login shell.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

/// Serialized `KEY=` prefixes of the environment entries forwarded remotely.
///
/// Everything else is deliberately dropped: forwarding is a conservative
/// allow-list, not a full environment transfer, so local settings cannot leak
/// into or collide with the remote account's configuration.
const FORWARDED_ENV_PREFIXES: &[&str] = &["TERM=", "PAGER="];

/// Builds the complete command string executed by the remote shell.
///
/// The result has the shape
///
/// ```text
/// { cd <path> && <env-fragment> <wrapped-command>; }
/// ```
///
/// where empty fragments elide their separator space. The brace group makes a
/// failed `cd` abort the whole command under the remote shell's own `&&`
/// semantics; no separate existence check is performed here.
///
/// The command argv is joined with single spaces and *not* re-quoted word by
/// word, so arguments carrying shell metacharacters are expanded by the
/// remote shell. That is the point: `cpu -r box ls '*.log'` globs remotely.
///
/// # Examples
///
/// ```
/// use cpu_core::remote_command::build_remote_command;
///
/// let command = vec!["make".to_string(), "check".to_string()];
/// let environ = vec!["TERM=xterm".to_string(), "PATH=/bin".to_string()];
/// let remote = build_remote_command("~/proj", &command, "/bin/bash", &environ);
///
/// assert_eq!(remote, r#"{ cd ~/proj && TERM=xterm bash -ci "make check"; }"#);
/// ```
#[must_use]
pub fn build_remote_command(
    remote_path: &str,
    command: &[String],
    shell: &str,
    environ: &[String],
) -> String {
    let joined = command.join(" ");
    let env = environment_fragment(environ);
    let wrapped = shell_wrapper(shell, &joined);

    if env.is_empty() {
        format!("{{ cd {remote_path} && {wrapped}; }}")
    } else {
        format!("{{ cd {remote_path} && {env} {wrapped}; }}")
    }
}

/// Collects the allow-listed environment entries into one fragment.
///
/// Entries are matched on their serialized `KEY=VALUE` form and forwarded in
/// the order the environment snapshot lists them.
#[must_use]
pub fn environment_fragment(environ: &[String]) -> String {
    let forwarded: Vec<&str> = environ
        .iter()
        .filter(|entry| {
            FORWARDED_ENV_PREFIXES
                .iter()
                .any(|prefix| entry.starts_with(prefix))
        })
        .map(String::as_str)
        .collect();
    forwarded.join(" ")
}

/// Wraps the joined command for the configured shell.
///
/// Only the final path segment of the shell decides the wrapping. For `bash`
/// the command is re-run under `bash -ci` so interactive startup files are
/// sourced and aliases behave as they do locally. Any other shell gets the
/// quoted command alone, executed directly by the remote login shell.
fn shell_wrapper(shell: &str, command: &str) -> String {
    match Path::new(shell).file_name().and_then(OsStr::to_str) {
        Some("bash") => format!("bash -ci {}", quote_double(command)),
        _ => {
            debug!(shell, "unrecognised shell, not re-invoking it remotely");
            quote_double(command)
        }
    }
}

/// Wraps `text` in double quotes, escaping the characters that would
/// terminate or alter the quoted word (`"` and `\`).
fn quote_double(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
