//! Guided commit with a standardized message format.
//!
//! Stages everything, commits as `{type}: {summary}` with the description
//! as the body, and pushes the current branch when the remote exists.

use crate::cli::CommitArgs;
use crate::config::Config;
use crate::console::{Console, Style, choose_option};
use crate::error::Result;
use crate::git::Repository;

/// Resolved inputs for one commit run.
pub(crate) struct Inputs {
    pub commit_type: String,
    pub summary: String,
    pub description: String,
}

pub(crate) fn run(
    repo: &Repository,
    config: &Config,
    console: &mut dyn Console,
    args: CommitArgs,
) -> Result<()> {
    let inputs = gather(config, console, args)?;
    execute(repo, config, console, &inputs)
}

pub(crate) fn gather(
    config: &Config,
    console: &mut dyn Console,
    args: CommitArgs,
) -> Result<Inputs> {
    let commit_type = match args.commit_type {
        Some(commit_type) => commit_type,
        None => choose_option(console, "Commit Type", &config.commit_types)?,
    };
    let summary = match args.summary {
        Some(summary) => summary,
        None => console.prompt_text("Enter short summary (max 50 chars)", None)?,
    };
    let description = match args.description {
        Some(description) => description,
        None => console.prompt_text("Enter detailed description", None)?,
    };

    Ok(Inputs {
        commit_type,
        summary,
        description,
    })
}

/// The standardized commit message: one blank line between summary and body.
pub(crate) fn commit_message(commit_type: &str, summary: &str, description: &str) -> String {
    format!("{}: {}\n\n{}", commit_type, summary, description)
}

pub(crate) fn execute(
    repo: &Repository,
    config: &Config,
    console: &mut dyn Console,
    inputs: &Inputs,
) -> Result<()> {
    console.print("Staging all changes...", Style::Info);
    repo.add_all()?;

    let message = commit_message(&inputs.commit_type, &inputs.summary, &inputs.description);
    console.print("Committing changes...", Style::Info);
    repo.commit(&message)?;
    console.print("Successfully committed changes.", Style::Highlight);

    if repo.has_remote(&config.remote)? {
        let current_branch = repo.current_branch()?;
        console.print(
            &format!("Pushing changes to branch '{}'...", current_branch),
            Style::Highlight,
        );
        repo.push(&config.remote, &current_branch)?;
        console.print("Successfully pushed changes.", Style::Success);
    }

    Ok(())
}
