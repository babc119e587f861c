//! Repository handle: thin, named operations over the git runner.
//!
//! Each method wraps exactly one git command. Workflows compose these
//! into fixed sequences; nothing here retains state between calls beyond
//! the repository root path.

use super::{get_repo_root, run_git};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A handle to a git working copy, anchored at the repository root.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
}

impl Repository {
    /// Discover the repository enclosing `cwd`.
    ///
    /// # Returns
    ///
    /// * `Ok(Repository)` - Anchored at the repository root
    /// * `Err(GitmateError::UserError)` - If `cwd` is not inside a git repository
    pub fn discover<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let root = get_repo_root(cwd)?;
        Ok(Self { root })
    }

    /// Open the repository enclosing the current working directory.
    pub fn open_current() -> Result<Self> {
        Self::discover(".")
    }

    /// The repository root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List local branch names, at most `limit`, in the order git reports
    /// them (sorted by refname).
    pub fn branches(&self, limit: usize) -> Result<Vec<String>> {
        let output = run_git(
            &self.root,
            &["for-each-ref", "refs/heads", "--format=%(refname:short)"],
        )?;
        Ok(output
            .lines()
            .into_iter()
            .take(limit)
            .map(String::from)
            .collect())
    }

    /// Check whether tracked files have uncommitted changes.
    ///
    /// Untracked files do not count as dirty, matching `git status
    /// --porcelain --untracked-files=no`.
    pub fn is_dirty(&self) -> Result<bool> {
        let output = run_git(
            &self.root,
            &["status", "--porcelain", "--untracked-files=no"],
        )?;
        Ok(!output.is_empty())
    }

    /// Check whether a remote with the given name is configured.
    pub fn has_remote(&self, name: &str) -> Result<bool> {
        let output = run_git(&self.root, &["remote"])?;
        Ok(output.lines().iter().any(|remote| *remote == name))
    }

    /// Fetch from the given remote.
    pub fn fetch(&self, remote: &str) -> Result<()> {
        run_git(&self.root, &["fetch", remote])?;
        Ok(())
    }

    /// Check out an existing ref (branch, tag, or commit).
    pub fn checkout(&self, refname: &str) -> Result<()> {
        run_git(&self.root, &["checkout", refname])?;
        Ok(())
    }

    /// Create a new branch at the current HEAD and switch to it.
    pub fn checkout_new_branch(&self, name: &str) -> Result<()> {
        run_git(&self.root, &["checkout", "-b", name])?;
        Ok(())
    }

    /// Stage all changes in the working tree, tracked and untracked.
    pub fn add_all(&self) -> Result<()> {
        run_git(&self.root, &["add", "--all"])?;
        Ok(())
    }

    /// Commit the staged changes with the given message.
    pub fn commit(&self, message: &str) -> Result<()> {
        run_git(&self.root, &["commit", "-m", message])?;
        Ok(())
    }

    /// Push a branch to a remote under its own name.
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        run_git(&self.root, &["push", remote, branch])?;
        Ok(())
    }

    /// Name of the currently checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        let output = run_git(&self.root, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.stdout)
    }

    /// Stash uncommitted changes under the given message.
    pub fn stash_push(&self, message: &str) -> Result<()> {
        run_git(&self.root, &["stash", "push", "-m", message])?;
        Ok(())
    }

    /// Restore the most recent stash entry and drop it.
    pub fn stash_pop(&self) -> Result<()> {
        run_git(&self.root, &["stash", "pop"])?;
        Ok(())
    }

    /// Check whether any stash entries exist.
    pub fn has_stash(&self) -> Result<bool> {
        let output = run_git(&self.root, &["stash", "list"])?;
        Ok(!output.is_empty())
    }

    /// Merge the given ref into the current branch.
    pub fn merge(&self, refname: &str) -> Result<()> {
        run_git(&self.root, &["merge", refname])?;
        Ok(())
    }
}
