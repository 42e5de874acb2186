//! Remote target parsing.
//!
//! A target names the remote account and, optionally, the directory the
//! command should run under: `[login@]host[:path]`.

use std::path::Path;

/// Parsed remote target with the login and remote working directory split out.
///
/// The login portion is opaque: it may carry a `user@` prefix or any other
/// transport-specific syntax, and is handed to the transport verbatim.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use cpu_core::target::split_target;
///
/// let target = split_target("alice@box:/srv/build", Path::new("/ignored"));
/// assert_eq!(target.login(), "alice@box");
/// assert_eq!(target.remote_path(), "/srv/build");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetSpec {
    login: String,
    remote_path: String,
}

impl TargetSpec {
    /// Returns the login identifier, exactly as given.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Returns the remote working directory for the command.
    #[must_use]
    pub fn remote_path(&self) -> &str {
        &self.remote_path
    }
}

/// Splits a raw target string into a [`TargetSpec`].
///
/// The split happens at the *first* `:` only, so paths containing further
/// colons survive intact. Without a `:` the caller's current working
/// directory stands in for the remote path, which is what makes
///
/// ```text
/// cd src/project && cpu -r buildbox make
/// ```
///
/// run under the matching directory on the remote side.
#[must_use]
pub fn split_target(remote: &str, cwd: &Path) -> TargetSpec {
    match remote.split_once(':') {
        Some((login, path)) => TargetSpec {
            login: login.to_string(),
            remote_path: path.to_string(),
        },
        None => TargetSpec {
            login: remote.to_string(),
            remote_path: cwd.to_string_lossy().into_owned(),
        },
    }
}
