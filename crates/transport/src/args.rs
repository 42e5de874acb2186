//! Transport argument vector assembly.

use cpu_core::tty::TtyPolicy;

/// Default policy flags: suppress the transport's informational output so
/// only the remote command's own streams reach the caller.
const DEFAULT_POLICY_FLAGS: &[&str] = &["-o", "LogLevel=QUIET"];

/// Flag forcing pseudo-terminal allocation even without a local terminal on
/// the transport's own stdin.
const FORCE_TTY_FLAG: &str = "-tt";

/// Batch-mode flags: disable the escape character and pseudo-terminal
/// allocation for non-interactive runs.
const NO_TTY_FLAGS: &[&str] = &["-e", "none", "-T"];

/// Builds the complete argument vector for the transport subprocess.
///
/// Order matters and follows the transport's argument grammar: policy flags
/// first, then terminal flags, then the login, and the remote command string
/// as the final positional argument.
///
/// When `policy_override` is present (the `CPU_SSH_ARGS` tokens), it replaces
/// the default quiet flags verbatim; the terminal flags are still appended.
///
/// # Examples
///
/// ```
/// use cpu_core::tty::TtyPolicy;
/// use cpu_transport::transport_args;
///
/// let args = transport_args("box", "{ cd ~/proj && \"make\"; }", TtyPolicy::NoTty, None);
///
/// assert_eq!(
///     args,
///     ["-o", "LogLevel=QUIET", "-e", "none", "-T", "box", "{ cd ~/proj && \"make\"; }"]
/// );
/// ```
#[must_use]
pub fn transport_args(
    login: &str,
    remote_command: &str,
    policy: TtyPolicy,
    policy_override: Option<&[String]>,
) -> Vec<String> {
    let mut args = Vec::new();

    match policy_override {
        Some(tokens) => args.extend(tokens.iter().cloned()),
        None => args.extend(DEFAULT_POLICY_FLAGS.iter().map(ToString::to_string)),
    }

    match policy {
        TtyPolicy::ForceTty => args.push(FORCE_TTY_FLAG.to_string()),
        TtyPolicy::NoTty => args.extend(NO_TTY_FLAGS.iter().map(ToString::to_string)),
    }

    args.push(login.to_string());
    args.push(remote_command.to_string());
    args
}
