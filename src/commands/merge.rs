//! Guided merge of the current branch into a target branch.
//!
//! Uncommitted work is stashed (with consent) before switching branches
//! and restored after the merge. Declining the stash aborts before any
//! mutating step.

use chrono::Local;

use crate::cli::MergeArgs;
use crate::config::Config;
use crate::console::{Console, Style};
use crate::error::Result;
use crate::git::Repository;

pub(crate) fn run(
    repo: &Repository,
    config: &Config,
    console: &mut dyn Console,
    args: MergeArgs,
) -> Result<()> {
    let target = gather_target(repo, config, console, args.target)?;
    execute(repo, console, &target)
}

/// Resolve the target branch, prompting with the recent-branch list plus
/// a synthetic default entry when no target was given on the command line.
pub(crate) fn gather_target(
    repo: &Repository,
    config: &Config,
    console: &mut dyn Console,
    target: Option<String>,
) -> Result<String> {
    if let Some(target) = target {
        return Ok(target);
    }

    let branches = repo.branches(config.branch_limit)?;

    console.print("Recent branches:", Style::Info);
    for (i, branch) in branches.iter().enumerate() {
        console.print(&format!("{}. {}", i + 1, branch), Style::Info);
    }
    console.print(
        &format!("{}. {} (default)", branches.len() + 1, config.default_base),
        Style::Info,
    );

    let mut allowed: Vec<String> = (1..=branches.len() + 1).map(|i| i.to_string()).collect();
    allowed.extend(branches.iter().cloned());
    let default = (branches.len() + 1).to_string();

    let choice = console.prompt_choice(
        "Select the target branch by number or enter branch name",
        &allowed,
        Some(&default),
    )?;

    Ok(resolve_target(&choice, &branches, &config.default_base))
}

/// Pure resolution of an accepted prompt answer:
/// a listed index selects that branch, the synthetic index (`len + 1`)
/// selects the default base, anything else is a branch name used verbatim.
pub(crate) fn resolve_target(choice: &str, branches: &[String], default_base: &str) -> String {
    if let Ok(n) = choice.parse::<usize>() {
        if n >= 1 && n <= branches.len() {
            return branches[n - 1].clone();
        }
        if n == branches.len() + 1 {
            return default_base.to_string();
        }
    }
    choice.to_string()
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub(crate) fn execute(repo: &Repository, console: &mut dyn Console, target: &str) -> Result<()> {
    let source = repo.current_branch()?;

    if repo.is_dirty()? {
        console.print(
            "Warning: Uncommitted changes detected in the working directory.",
            Style::Warning,
        );
        let yes_no = vec!["yes".to_string(), "no".to_string()];
        let answer = console.prompt_choice(
            "Do you want to stash the changes? (yes/no)",
            &yes_no,
            Some("yes"),
        )?;

        if answer == "yes" {
            let stash_message =
                format!("Stash before merging into {} at {}", target, timestamp());
            console.print("Stashing uncommitted changes...", Style::Info);
            repo.stash_push(&stash_message)?;
            console.print(
                &format!("Changes have been stashed with message: '{}'.", stash_message),
                Style::Success,
            );
        } else {
            console.print("Aborting merge to avoid data loss.", Style::Danger);
            return Ok(());
        }
    }

    console.print(
        &format!("Switching to target branch '{}'...", target),
        Style::Highlight,
    );
    repo.checkout(target)?;

    console.print(
        &format!("Merging branch '{}' into '{}'...", source, target),
        Style::Info,
    );
    repo.merge(&source)?;

    console.print(
        &format!("Successfully merged '{}' into '{}'.", source, target),
        Style::Success,
    );

    // Pops the most recent stash, whichever workflow created it.
    if repo.has_stash()? {
        console.print("Applying stashed changes...", Style::Info);
        repo.stash_pop()?;
        console.print("Stashed changes have been applied.", Style::Success);
    }

    Ok(())
}
