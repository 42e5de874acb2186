//! Pseudo-terminal allocation policy.

use std::io;

use is_terminal::IsTerminal;

/// Interactivity of the three standard streams, probed once at startup.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TtyStreams {
    /// Whether standard input is attached to a terminal.
    pub stdin: bool,
    /// Whether standard output is attached to a terminal.
    pub stdout: bool,
    /// Whether standard error is attached to a terminal.
    pub stderr: bool,
}

impl TtyStreams {
    /// Queries the real standard streams of this process.
    #[must_use]
    pub fn probe() -> Self {
        Self {
            stdin: io::stdin().is_terminal(),
            stdout: io::stdout().is_terminal(),
            stderr: io::stderr().is_terminal(),
        }
    }

    /// Returns `true` when at least one stream is attached to a terminal.
    #[must_use]
    pub const fn any_interactive(self) -> bool {
        self.stdin || self.stdout || self.stderr
    }
}

/// Terminal-allocation policy handed to the transport.
///
/// The decision is a plain boolean OR over the three streams: a single
/// interactive stream is enough to request a pseudo-terminal, so full-screen
/// programs keep working even with, say, stderr redirected. Only a fully
/// non-interactive invocation runs in batch mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TtyPolicy {
    /// Force pseudo-terminal allocation on the remote side.
    ForceTty,
    /// No pseudo-terminal; the transport also disables its escape mechanism.
    NoTty,
}

impl TtyPolicy {
    /// Derives the policy from the captured stream interactivity.
    #[must_use]
    pub const fn from_streams(streams: TtyStreams) -> Self {
        if streams.any_interactive() {
            Self::ForceTty
        } else {
            Self::NoTty
        }
    }
}
