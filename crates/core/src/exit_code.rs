//! Centralized exit code definitions.
//!
//! Apart from these local codes, the launcher's exit status is always the
//! remote command's status as reported by the transport, propagated verbatim.
//! Only failures that happen on this side of the connection map to the codes
//! below.

/// Command-line usage error: missing target or missing command.
pub const EX_USAGE: i32 = 64;

/// The transport binary could not be spawned at all.
pub const EX_SPAWN_FAILED: i32 = 127;

/// Maximum exit code representable by a Unix process.
///
/// Doubles as the fatal code when the transport terminates without a
/// recoverable exit status.
pub const MAX_EXIT_CODE: i32 = u8::MAX as i32;
