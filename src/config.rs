//! Configuration model for gitmate.
//!
//! Represents an optional `.gitmate.yml` at the repository root. Unknown
//! fields are ignored for forward compatibility, every field has a
//! default, and values are validated after parsing. With no file present
//! the defaults reproduce the built-in behavior exactly.

use crate::error::{GitmateError, Result};
use serde::Deserialize;
use std::path::Path;

/// Name of the optional per-repository config file.
pub const CONFIG_FILE: &str = ".gitmate.yml";

/// Configuration for gitmate workflows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Branch types offered by the `new-branch` chooser.
    #[serde(default = "default_branch_types")]
    pub branch_types: Vec<String>,

    /// Commit types offered by the `commit` chooser.
    #[serde(default = "default_commit_types")]
    pub commit_types: Vec<String>,

    /// Base branch used when none is given (default: "master").
    #[serde(default = "default_base")]
    pub default_base: String,

    /// Remote used for fetch and push (default: "origin").
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Maximum number of branches shown in reference lists.
    #[serde(default = "default_branch_limit")]
    pub branch_limit: usize,
}

fn default_branch_types() -> Vec<String> {
    ["feature", "hotfix", "enhance", "chore"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_commit_types() -> Vec<String> {
    ["feat", "fix", "enhance", "docs", "chore"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_base() -> String {
    "master".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch_limit() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch_types: default_branch_types(),
            commit_types: default_commit_types(),
            default_base: default_base(),
            remote: default_remote(),
            branch_limit: default_branch_limit(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GitmateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GitmateError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `.gitmate.yml` from the repository root, or defaults when the
    /// file does not exist. A present but invalid file is an error.
    pub fn load_from_repo<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `branch_types` and `commit_types` must be non-empty
    /// - `default_base` and `remote` must be non-empty strings
    /// - `branch_limit` must be positive
    pub fn validate(&self) -> Result<()> {
        if self.branch_types.is_empty() {
            return Err(GitmateError::UserError(
                "config validation failed: branch_types must not be empty".to_string(),
            ));
        }

        if self.commit_types.is_empty() {
            return Err(GitmateError::UserError(
                "config validation failed: commit_types must not be empty".to_string(),
            ));
        }

        if self.default_base.is_empty() {
            return Err(GitmateError::UserError(
                "config validation failed: default_base must not be empty".to_string(),
            ));
        }

        if self.remote.is_empty() {
            return Err(GitmateError::UserError(
                "config validation failed: remote must not be empty".to_string(),
            ));
        }

        if self.branch_limit == 0 {
            return Err(GitmateError::UserError(
                "config validation failed: branch_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
