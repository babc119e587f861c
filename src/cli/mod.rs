//! CLI argument parsing for gitmate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Gitmate: Interactive CLI helper for everyday git workflows.
///
/// Wraps branch creation, standardized commits, and stash-guarded merges
/// behind guided prompts. Missing inputs are gathered interactively;
/// flags make any command fully scriptable.
#[derive(Parser, Debug)]
#[command(name = "gitmate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for gitmate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new branch interactively.
    ///
    /// Shows recent branches for reference, fetches from the remote when
    /// one exists, checks out the base branch, and creates
    /// "{branch-type}/{name}" from it.
    #[command(alias = "new_branch")]
    NewBranch(NewBranchArgs),

    /// Add, commit, and push changes with a standard message format.
    ///
    /// Stages everything, commits as "{type}: {summary}" with the
    /// description as the body, and pushes the current branch when a
    /// remote exists.
    Commit(CommitArgs),

    /// Merge the current branch into a target branch.
    ///
    /// Stashes uncommitted changes (with consent) before switching to the
    /// target, merges, and restores the stash afterwards.
    Merge(MergeArgs),
}

/// Arguments for the `new-branch` command.
#[derive(Parser, Debug)]
pub struct NewBranchArgs {
    /// Type of branch (feature, hotfix, enhance, chore).
    #[arg(long)]
    pub branch_type: Option<String>,

    /// Base branch to create from (default: the configured base branch).
    #[arg(long)]
    pub base: Option<String>,

    /// Branch name (without spaces).
    pub name: Option<String>,
}

/// Arguments for the `commit` command.
#[derive(Parser, Debug)]
pub struct CommitArgs {
    /// Commit type (feat, fix, enhance, docs, chore).
    #[arg(long = "type")]
    pub commit_type: Option<String>,

    /// Short summary of changes (max 50 chars advised).
    #[arg(long)]
    pub summary: Option<String>,

    /// Detailed description of the commit.
    #[arg(long)]
    pub description: Option<String>,
}

/// Arguments for the `merge` command.
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Target branch to merge the current branch into.
    pub target: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
