#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! # Overview
//!
//! `cpu_transport` owns the boundary to the external remote-login transport:
//! assembling its argument vector and driving it as a child process. All
//! network, authentication, and terminal plumbing is the transport's own
//! business; this crate only prepares its command line and reports how it
//! ended.
//!
//! # Design
//!
//! - [`args`] is pure data preparation: policy flags, terminal flags, login,
//!   and the remote command string, in the order the transport's argument
//!   grammar requires.
//! - [`invoke`] is the single side-effecting call in the whole launcher: it
//!   spawns the transport with the three standard streams inherited and
//!   blocks until it terminates.
//!
//! # Invariants
//!
//! - Exactly one child process per invocation; its exit status is the sole
//!   determinant of the launcher's own exit status.
//! - Standard streams are connected by file-descriptor inheritance at spawn
//!   time. Nothing in this process buffers, frames, or pumps the relayed
//!   data, so interactive programs behave as they do locally.
//! - No retries: a failed spawn, a failed remote command, and a signaled
//!   transport are each surfaced exactly once, synchronously.
//!
//! # Errors
//!
//! [`TransportError`] distinguishes the transport that could not be started
//! from the transport that could not be awaited or died without an exit
//! code. Each variant maps to a fixed local exit code via
//! [`TransportError::exit_code`]; a remote command that merely failed is not
//! an error here, its code is propagated verbatim.
//!
//! # See also
//!
//! - `cpu_core` for the engine that produces the values assembled here.

pub mod args;
pub mod invoke;

pub use args::transport_args;
pub use invoke::{TransportError, invoke};

/// The remote-login program used when no override is configured.
pub const DEFAULT_TRANSPORT: &str = "ssh";
