//! Guided branch creation.
//!
//! Resolves the branch type, base, and name (prompting for whatever the
//! flags left out), then runs a fixed sequence: optional fetch, checkout
//! of the base, and creation of `{type}/{name}` from it.

use crate::cli::NewBranchArgs;
use crate::config::Config;
use crate::console::{Console, Style, choose_option};
use crate::error::Result;
use crate::git::Repository;

/// Resolved inputs for one branch-creation run.
pub(crate) struct Inputs {
    pub branch_type: String,
    pub base: String,
    pub name: String,
}

pub(crate) fn run(
    repo: &Repository,
    config: &Config,
    console: &mut dyn Console,
    args: NewBranchArgs,
) -> Result<()> {
    let inputs = gather(repo, config, console, args)?;
    execute(repo, config, console, &inputs)
}

/// Gather missing inputs interactively.
///
/// Recent branches are listed before the name prompt so the user can pick
/// a consistent name; the list is reference only.
pub(crate) fn gather(
    repo: &Repository,
    config: &Config,
    console: &mut dyn Console,
    args: NewBranchArgs,
) -> Result<Inputs> {
    let branch_type = match args.branch_type {
        Some(branch_type) => branch_type,
        None => choose_option(console, "Branch Type", &config.branch_types)?,
    };
    let base = args.base.unwrap_or_else(|| config.default_base.clone());

    let branches = repo.branches(config.branch_limit)?;
    console.print("Recent branches:", Style::Info);
    for (i, branch) in branches.iter().enumerate() {
        console.print(&format!("{}. {}", i + 1, branch), Style::Info);
    }
    console.print(
        "Use full for making a new branch for fixes and enhancements",
        Style::Info,
    );

    let name = match args.name {
        Some(name) => name,
        None => console.prompt_text("Enter branch name (without spaces)", None)?,
    };

    Ok(Inputs {
        branch_type,
        base,
        name,
    })
}

/// The new branch ref: type and name joined by a literal slash.
pub(crate) fn branch_ref_name(branch_type: &str, name: &str) -> String {
    format!("{}/{}", branch_type, name)
}

pub(crate) fn execute(
    repo: &Repository,
    config: &Config,
    console: &mut dyn Console,
    inputs: &Inputs,
) -> Result<()> {
    if repo.is_dirty()? {
        console.print("Warning: Working directory not clean.", Style::Warning);
    }

    if !repo.has_remote(&config.remote)? {
        console.print(
            &format!("No remote named '{}' found. Skipping fetch.", config.remote),
            Style::Warning,
        );
    } else {
        console.print(
            &format!("Fetching latest changes from '{}'...", inputs.base),
            Style::Info,
        );
        repo.fetch(&config.remote)?;
    }

    console.print(
        &format!("Switching to base branch '{}'...", inputs.base),
        Style::Highlight,
    );
    repo.checkout(&inputs.base)?;

    let branch_name = branch_ref_name(&inputs.branch_type, &inputs.name);
    console.print(
        &format!("Creating new branch '{}'...", branch_name),
        Style::Info,
    );
    repo.checkout_new_branch(&branch_name)?;

    console.print(
        &format!("Successfully created and switched to '{}'.", branch_name),
        Style::Success,
    );
    Ok(())
}
