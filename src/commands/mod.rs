//! Workflow implementations for gitmate.
//!
//! The dispatcher opens the repository, loads config, and routes to the
//! workflow modules. Each workflow returns an explicit `Result`; git
//! failures are caught here, printed under the danger style, and the
//! process still exits 0. Only fatal pre-condition errors (not a
//! repository, invalid config) propagate to `main`.

mod commit;
mod merge;
mod new_branch;

use crate::cli::Command;
use crate::config::Config;
use crate::console::{Console, Style, TermConsole};
use crate::error::{GitmateError, Result};
use crate::git::Repository;

/// Dispatch a command to its workflow.
pub fn dispatch(command: Command) -> Result<()> {
    let repo = Repository::open_current()?;
    let config = Config::load_from_repo(repo.root())?;
    let mut console = TermConsole::new();

    let outcome = match command {
        Command::NewBranch(args) => new_branch::run(&repo, &config, &mut console, args),
        Command::Commit(args) => commit::run(&repo, &config, &mut console, args),
        Command::Merge(args) => merge::run(&repo, &config, &mut console, args),
    };

    report(outcome, &mut console)
}

/// Reduce a workflow outcome to the process-level result.
///
/// A failed git step has already stopped the workflow at that point; the
/// message is shown once and the run is not treated as a process failure.
fn report(outcome: Result<()>, console: &mut dyn Console) -> Result<()> {
    match outcome {
        Err(GitmateError::GitError(message)) => {
            console.print(&format!("Error: {}", message), Style::Danger);
            Ok(())
        }
        other => other,
    }
}
