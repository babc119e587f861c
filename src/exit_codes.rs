//! Exit code constants for the gitmate CLI.
//!
//! - 0: Success (including workflows that caught and reported a git failure)
//! - 1: User error (not a git repository, invalid config)
//! - 2: Git operation failure that escaped a workflow

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: not inside a git repository, or an invalid config file.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: a git command error that was not caught and
/// reported by a workflow. Workflows catch these and exit 0, so this
/// code is only observed if an error escapes the command layer.
pub const GIT_FAILURE: i32 = 2;
