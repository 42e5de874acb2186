//! Transport subprocess driving.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

use cpu_core::exit_code::{EX_SPAWN_FAILED, MAX_EXIT_CODE};

/// Errors surfaced while driving the transport subprocess.
///
/// A remote command that ran and exited non-zero is *not* an error here; its
/// code comes back through the `Ok` branch of [`invoke`] and is propagated
/// verbatim.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport binary could not be started at all.
    #[error("failed to launch transport '{program}': {source}")]
    Spawn {
        /// Name of the binary that failed to start.
        program: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Waiting on the spawned transport failed outright.
    #[error("failed to wait for transport '{program}': {source}")]
    Wait {
        /// Name of the binary being awaited.
        program: String,
        /// The underlying OS error.
        #[source]
        source: io::Error,
    },

    /// The transport terminated without a recoverable exit code, e.g. it was
    /// killed by a signal.
    #[error("transport '{program}' terminated abnormally ({status})")]
    Interrupted {
        /// Name of the binary that died.
        program: String,
        /// Human-readable rendering of the wait status.
        status: String,
    },
}

impl TransportError {
    /// Maps the error to the launcher's exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Spawn { .. } => EX_SPAWN_FAILED,
            Self::Wait { .. } | Self::Interrupted { .. } => MAX_EXIT_CODE,
        }
    }
}

/// Spawns the transport and blocks until it terminates.
///
/// The child inherits this process's standard input, output, and error, so
/// stream relaying happens entirely in the OS: no in-process copy loop, no
/// buffering, no flow control. Interrupts delivered to the foreground
/// process group reach the child directly.
///
/// Returns the child's exact numeric exit code on a normal exit, including
/// non-zero codes from the remote command.
pub fn invoke(program: &str, args: &[String]) -> Result<i32, TransportError> {
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!(program, ?args, "spawning transport");

    let mut child = command.spawn().map_err(|source| TransportError::Spawn {
        program: program.to_string(),
        source,
    })?;

    let status = child.wait().map_err(|source| TransportError::Wait {
        program: program.to_string(),
        source,
    })?;

    match status.code() {
        Some(code) => {
            if code != 0 {
                debug!(code, "transport exited with a non-zero status");
            }
            Ok(code)
        }
        None => Err(TransportError::Interrupted {
            program: program.to_string(),
            status: status.to_string(),
        }),
    }
}
