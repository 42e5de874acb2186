#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! # Overview
//!
//! `cpu_cli` is the thin command-line front-end of the `cpu` launcher. It
//! recognises the launcher's small flag surface (`-r/--remote`, `-s/--shell`,
//! `-v/--verbose`, plus the generated `--help` and `--version`), applies the
//! environment defaults, and wires the invocation engine in `cpu_core` to the
//! subprocess boundary in `cpu_transport`.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so the whole front-end can be exercised in-process by tests; the
//! binary in `src/bin/cpu.rs` forwards `env::args_os()` and the locked real
//! handles. A [`clap`](https://docs.rs/clap/) command definition performs the
//! parse; everything after the flags is collected verbatim as the remote
//! command.
//!
//! Configuration is read exactly once per run: flag values and their
//! environment defaults in [`parse_args`], the transport overrides in
//! [`TransportConfig::from_env`]. The rest of the run operates on those
//! captured values only.
//!
//! # Invariants
//!
//! - [`run`] never panics; failures surface as diagnostics on the error
//!   handle plus a non-zero exit code.
//! - Local diagnostics go to standard error. Standard output belongs to the
//!   remote command (and to `--help`/`--version`), nothing else.
//! - A remote command that ran and failed is not a local error: its exit
//!   code is returned verbatim.
//!
//! # Errors
//!
//! Usage errors (missing target, missing command, unparseable flags) exit
//! with [`EX_USAGE`]. A transport that could not be spawned exits with
//! `EX_SPAWN_FAILED` (127); a transport that died without an exit code exits
//! with `MAX_EXIT_CODE` (255). See `cpu_core::exit_code`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cpu_cli::run(["cpu", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(code, 0);
//! assert!(!stdout.is_empty());
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `cpu_core` for the invocation engine.
//! - `cpu_transport` for the subprocess boundary.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, error::ErrorKind};
use tracing_subscriber::EnvFilter;

use cpu_core::exit_code::EX_USAGE;
use cpu_core::path_map::relativize_home;
use cpu_core::remote_command::build_remote_command;
use cpu_core::target::split_target;
use cpu_core::tty::TtyPolicy;
use cpu_core::InvocationContext;
use cpu_transport::{DEFAULT_TRANSPORT, invoke, transport_args};

/// Name the launcher reports in usage text and diagnostics.
const PROGRAM_NAME: &str = "cpu";

/// Environment variable supplying the default `-r` target.
pub const REMOTE_ENV: &str = "CPU_REMOTE";

/// Environment variable supplying the default `-s` shell.
pub const SHELL_ENV: &str = "SHELL";

/// Environment variable replacing the default transport policy flags.
pub const SSH_ARGS_ENV: &str = "CPU_SSH_ARGS";

/// Environment variable overriding the transport program itself.
pub const SSH_PROGRAM_ENV: &str = "CPU_SSH";

/// Environment variable carrying log filter directives for `-v` diagnostics.
pub const LOG_ENV: &str = "CPU_LOG";

/// Flag values after parsing, with environment defaults applied.
#[derive(Clone, Debug)]
pub struct ParsedArgs {
    /// The `[login@]host[:path]` target, from `-r` or [`REMOTE_ENV`].
    pub remote: Option<String>,
    /// Shell to emulate remotely, from `-s` or [`SHELL_ENV`]; may be empty.
    pub shell: String,
    /// Whether `-v` was given.
    pub verbose: bool,
    /// The remote command and its arguments, verbatim.
    pub command: Vec<String>,
}

/// Transport settings drawn from the environment, captured once per run.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// The transport program to spawn.
    pub program: String,
    /// Verbatim replacement for the default policy flags, when configured.
    pub policy_override: Option<Vec<String>>,
}

impl TransportConfig {
    /// Reads [`SSH_PROGRAM_ENV`] and [`SSH_ARGS_ENV`].
    ///
    /// An unset or empty [`SSH_ARGS_ENV`] keeps the default policy flags; a
    /// set value is split on whitespace and used verbatim, even when that
    /// leaves no tokens at all.
    #[must_use]
    pub fn from_env() -> Self {
        let program = env::var(SSH_PROGRAM_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TRANSPORT.to_string());
        let policy_override = env::var(SSH_ARGS_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .map(|value| value.split_whitespace().map(ToString::to_string).collect());

        Self {
            program,
            policy_override,
        }
    }
}

/// Runs the launcher front-end and returns the process exit code.
///
/// `stdout` receives `--help`/`--version` output; `stderr` receives
/// diagnostics. The remote command's own streams never pass through these
/// handles — the transport child inherits the real file descriptors.
pub fn run<I, Out, Err>(args: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let parsed = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(error) => return render_clap_error(&error, stdout, stderr),
    };

    init_tracing(parsed.verbose);

    let Some(remote) = parsed.remote.clone() else {
        return usage_error("missing remote machine", stderr);
    };
    if parsed.command.is_empty() {
        return usage_error("missing command", stderr);
    }

    let transport = TransportConfig::from_env();
    let context = InvocationContext::capture(parsed.command, parsed.shell);

    launch(&remote, &context, &transport, stderr)
}

/// Maps an exit code onto [`ExitCode`], clamping to the process-status range.
#[must_use]
pub fn exit_code_from(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::from(u8::MAX), ExitCode::from)
}

/// Parses the argument list and applies the environment defaults.
///
/// An empty `-r` value (or an empty [`REMOTE_ENV`]) counts as no target at
/// all, so the caller reports it as missing rather than handing the
/// transport an empty login.
pub fn parse_args<I>(args: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let matches = clap_command().try_get_matches_from(args)?;

    let remote = match matches.get_one::<String>("remote") {
        Some(value) => Some(value.clone()),
        None => env::var(REMOTE_ENV).ok(),
    }
    .filter(|value| !value.is_empty());
    let shell = matches
        .get_one::<String>("shell")
        .cloned()
        .or_else(|| env::var(SHELL_ENV).ok())
        .unwrap_or_default();
    let command = matches
        .get_many::<String>("command")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        remote,
        shell,
        verbose: matches.get_flag("verbose"),
        command,
    })
}

/// Helpers exposed for the crate's integration tests.
#[doc(hidden)]
pub mod test_utils {
    pub use crate::{ParsedArgs, TransportConfig, parse_args};
}

/// The clap command definition for the launcher.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs a command on a remote machine, preserving the local working directory")
        .arg(
            Arg::new("remote")
                .short('r')
                .long("remote")
                .value_name("TARGET")
                .help("Remote machine as [login@]host[:path]; the path overrides the working directory [env: CPU_REMOTE]"),
        )
        .arg(
            Arg::new("shell")
                .short('s')
                .long("shell")
                .value_name("SHELL")
                .help("Shell to emulate on the remote [env: SHELL]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Increase verbosity"),
        )
        .arg(
            Arg::new("command")
                .value_name("COMMAND")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .help("Command and arguments to run on the remote machine"),
        )
}

/// Drives one parsed invocation end-to-end and returns the exit code.
fn launch<Err>(
    remote: &str,
    context: &InvocationContext,
    transport: &TransportConfig,
    stderr: &mut Err,
) -> i32
where
    Err: Write,
{
    let target = split_target(remote, &context.cwd);
    let mapped = relativize_home(target.remote_path(), context.home.as_deref());
    let remote_command =
        build_remote_command(&mapped, &context.command, &context.shell, &context.environment);
    let policy = TtyPolicy::from_streams(context.tty);
    let args = transport_args(
        target.login(),
        &remote_command,
        policy,
        transport.policy_override.as_deref(),
    );

    match invoke(&transport.program, &args) {
        Ok(code) => code,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code()
        }
    }
}

/// Reports a usage error with the rendered usage line and returns [`EX_USAGE`].
fn usage_error<Err>(message: &str, stderr: &mut Err) -> i32
where
    Err: Write,
{
    let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
    let _ = writeln!(stderr, "{}", clap_command().render_usage());
    EX_USAGE
}

/// Routes a clap error to the right stream with the right exit code.
///
/// `--help` and `--version` arrive here as "errors" but belong on standard
/// output with a zero exit; everything else is a usage error.
fn render_clap_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{}", error.render());
            0
        }
        _ => {
            let _ = write!(stderr, "{}", error.render());
            EX_USAGE
        }
    }
}

/// Installs the stderr tracing subscriber once per process.
///
/// `-v` lowers the default level to `debug`, which is where the assembled
/// transport invocation is echoed before the spawn. [`LOG_ENV`] overrides
/// the filter entirely when set.
fn init_tracing(verbose: bool) {
    let default_directives = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
