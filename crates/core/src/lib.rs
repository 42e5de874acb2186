#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! # Overview
//!
//! `cpu_core` implements the remote invocation engine behind the `cpu`
//! launcher: everything that turns a `[login@]host[:path]` target and a local
//! command line into the exact command string executed by the remote shell.
//! The crate is deliberately free of side effects beyond the one-shot
//! [`context::InvocationContext::capture`] snapshot; every other function is a
//! pure mapping over captured data.
//!
//! # Design
//!
//! The modules mirror the stages of an invocation:
//!
//! - [`context`] captures the process surroundings (environment, working
//!   directory, home directory, stream interactivity) exactly once.
//! - [`target`] splits the raw target into an opaque login and a remote path.
//! - [`path_map`] rewrites the path into its home-relative form so the same
//!   invocation works across accounts with different home directories.
//! - [`tty`] decides whether the transport must allocate a pseudo-terminal.
//! - [`remote_command`] assembles the final brace-grouped command string,
//!   including the forwarded environment slice and the shell wrapper.
//! - [`exit_code`] holds the process exit codes shared across the workspace.
//!
//! # Invariants
//!
//! - [`context::InvocationContext`] is immutable after capture; components
//!   receive it (or slices of it) explicitly and never re-query the OS.
//! - Target splitting happens at the *first* `:` only; everything after it is
//!   forwarded untouched, colons included.
//! - Path mapping is lexical. No canonicalization, no symlink resolution: the
//!   `~` produced here is re-expanded by the remote shell against the remote
//!   account's home directory.
//! - Environment forwarding is a fixed allow-list; no other variable crosses
//!   to the remote side.
//!
//! # Examples
//!
//! ```
//! use std::path::Path;
//!
//! let target = cpu_core::target::split_target("box:/home/alice/proj", Path::new("/tmp"));
//! let mapped = cpu_core::path_map::relativize_home(target.remote_path(), Some("/home/alice"));
//!
//! assert_eq!(target.login(), "box");
//! assert_eq!(mapped, "~/proj");
//! ```
//!
//! # See also
//!
//! - `cpu_transport` for the transport argument vector and the subprocess
//!   boundary these values feed into.
//! - `cpu_cli` for the front-end that wires the stages together.

pub mod context;
pub mod exit_code;
pub mod path_map;
pub mod remote_command;
pub mod target;
pub mod tty;

pub use context::InvocationContext;
pub use target::TargetSpec;
pub use tty::{TtyPolicy, TtyStreams};
