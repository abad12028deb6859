//! Exit code constants for the gauntlet CLI.
//!
//! - 0: Success — every task in the matrix passed
//! - 1: Task failure fallback (used when the failing command's own exit
//!   code is unavailable, e.g. it could not be spawned)
//! - 2: Config error — malformed matrix definition, nothing was run
//! - 130: Run aborted by an interrupt signal

/// Full success: every executed task exited zero and none were skipped.
pub const SUCCESS: i32 = 0;

/// Generic task-failure code, used when the failing external command did
/// not leave a usable exit code of its own.
pub const TASK_FAILURE: i32 = 1;

/// Malformed matrix definition: duplicate names, empty stage list,
/// unreadable or unparsable matrix file. Reported before any task runs.
pub const CONFIG_ERROR: i32 = 2;

/// The run was aborted by an external interrupt (Ctrl-C).
pub const INTERRUPTED: i32 = 130;
