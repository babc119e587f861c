//! Error types for the gitmate CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for gitmate operations.
///
/// `UserError` is fatal and terminates the process with a non-zero code.
/// `GitError` is caught at the command layer, printed under the danger
/// style, and the process still exits 0. The exit-code mapping for
/// `GitError` exists so an error that escapes the catch is still not
/// reported as success.
#[derive(Error, Debug)]
pub enum GitmateError {
    /// Current directory is not a git working copy, or config is invalid.
    #[error("{0}")]
    UserError(String),

    /// A git command failed.
    #[error("{0}")]
    GitError(String),
}

impl GitmateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GitmateError::UserError(_) => exit_codes::USER_ERROR,
            GitmateError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for gitmate operations.
pub type Result<T> = std::result::Result<T, GitmateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = GitmateError::UserError("not inside a git repository".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn git_error_has_correct_exit_code() {
        let err = GitmateError::GitError("merge failed".to_string());
        assert_eq!(err.exit_code(), exit_codes::GIT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GitmateError::GitError("git checkout failed: pathspec".to_string());
        assert_eq!(err.to_string(), "git checkout failed: pathspec");
    }
}
