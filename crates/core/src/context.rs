//! One-shot capture of the process surroundings.

use std::env;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::tty::TtyStreams;

/// Immutable snapshot of everything an invocation needs from the process.
///
/// The snapshot is taken exactly once at process entry and passed explicitly
/// to the components that consume it; nothing re-reads the environment or
/// re-probes the terminal afterwards. That keeps every decision in the
/// engine a pure function over this data.
#[derive(Clone, Debug)]
pub struct InvocationContext {
    /// The user's command and its arguments, forwarded verbatim.
    pub command: Vec<String>,
    /// Path or name of the shell to emulate on the remote side.
    pub shell: String,
    /// Serialized `KEY=VALUE` environment entries, in snapshot order.
    pub environment: Vec<String>,
    /// Local working directory at startup.
    pub cwd: PathBuf,
    /// The current user's home directory, when it could be determined.
    pub home: Option<String>,
    /// Interactivity of the three standard streams.
    pub tty: TtyStreams,
}

impl InvocationContext {
    /// Captures the surroundings of the running process.
    ///
    /// A failed home-directory lookup is not an error: the path mapper
    /// degrades to leaving paths unmapped, and a note is logged here. A
    /// failed working-directory query likewise degrades to an empty path.
    #[must_use]
    pub fn capture(command: Vec<String>, shell: String) -> Self {
        let cwd = env::current_dir().unwrap_or_else(|error| {
            debug!(%error, "could not determine the working directory");
            PathBuf::new()
        });

        let home = current_user_home();
        if home.is_none() {
            warn!("could not determine the home directory, remote paths stay unmapped");
        }

        Self {
            command,
            shell,
            environment: env::vars_os()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        key.to_string_lossy(),
                        value.to_string_lossy()
                    )
                })
                .collect(),
            cwd,
            home,
            tty: TtyStreams::probe(),
        }
    }
}

/// Looks up the current user's home directory in the user database.
#[cfg(unix)]
fn current_user_home() -> Option<String> {
    use uzers::os::unix::UserExt;

    let user = uzers::get_user_by_uid(uzers::get_current_uid())?;
    let home = user.home_dir().to_string_lossy().into_owned();
    (!home.is_empty()).then_some(home)
}

/// Falls back to the `HOME` environment variable on non-Unix hosts.
#[cfg(not(unix))]
fn current_user_home() -> Option<String> {
    env::var("HOME").ok().filter(|home| !home.is_empty())
}
