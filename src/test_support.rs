use crate::console::{Console, Style};
use crate::error::{GitmateError, Result};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Scratch git repository for tests. Holds the temp directory alive and
/// exposes the working copy (and bare origin, when configured).
pub(crate) struct TestRepo {
    _dir: TempDir,
    workdir: PathBuf,
    remote: Option<PathBuf>,
}

impl TestRepo {
    pub(crate) fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub(crate) fn remote_path(&self) -> &Path {
        self.remote
            .as_deref()
            .expect("test repo was created without a remote")
    }
}

pub(crate) fn create_test_repo() -> TestRepo {
    create_repo(CreateRepoOptions {
        add_origin_remote: false,
    })
}

pub(crate) fn create_test_repo_with_remote() -> TestRepo {
    create_repo(CreateRepoOptions {
        add_origin_remote: true,
    })
}

struct CreateRepoOptions {
    add_origin_remote: bool,
}

fn create_repo(opts: CreateRepoOptions) -> TestRepo {
    let temp_dir = TempDir::new().unwrap();
    let workdir = temp_dir.path().join("work");
    std::fs::create_dir_all(&workdir).unwrap();

    git(&workdir, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(&workdir, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    // Configure git user for commits
    git(&workdir, &["config", "user.email", "test@example.com"]);
    git(&workdir, &["config", "user.name", "Test User"]);

    std::fs::write(workdir.join("README.md"), "# Test\n").unwrap();
    git(&workdir, &["add", "."]);
    git(&workdir, &["commit", "-m", "Initial commit"]);

    // Bare sibling repo as origin so fetch and push both work.
    let remote = if opts.add_origin_remote {
        let bare = temp_dir.path().join("origin.git");
        std::fs::create_dir_all(&bare).unwrap();
        git(&bare, &["init", "--bare"]);
        let bare_str = bare.to_string_lossy().to_string();
        git(&workdir, &["remote", "add", "origin", &bare_str]);
        Some(bare)
    } else {
        None
    };

    TestRepo {
        _dir: temp_dir,
        workdir,
        remote,
    }
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}

/// Console double driven by canned answers, recording every printed line.
///
/// Prompt methods consume answers in order; invalid answers are skipped
/// the same way the terminal console re-prompts. Running out of answers
/// is an error so a test never hangs on a missing input.
pub(crate) struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub(crate) printed: Vec<(Style, String)>,
    pub(crate) tables: Vec<(String, Vec<String>)>,
}

impl ScriptedConsole {
    pub(crate) fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            printed: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// All printed lines joined, for substring assertions.
    pub(crate) fn transcript(&self) -> String {
        self.printed
            .iter()
            .map(|(_, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(crate) fn printed_with_style(&self, style: Style) -> Vec<&str> {
        self.printed
            .iter()
            .filter(|(s, _)| *s == style)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    fn next_input(&mut self) -> Result<String> {
        self.inputs.pop_front().ok_or_else(|| {
            GitmateError::UserError("scripted console ran out of answers".to_string())
        })
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str, style: Style) {
        self.printed.push((style, text.to_string()));
    }

    fn render_table(&mut self, title: &str, rows: &[String]) {
        self.tables.push((title.to_string(), rows.to_vec()));
    }

    fn prompt_text(&mut self, _label: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next_input()?;
        if answer.is_empty() {
            if let Some(default) = default {
                return Ok(default.to_string());
            }
        }
        Ok(answer)
    }

    fn prompt_index(&mut self, _label: &str, max: usize) -> Result<usize> {
        loop {
            let answer = self.next_input()?;
            if let Ok(n) = answer.parse::<usize>() {
                if n >= 1 && n <= max {
                    return Ok(n);
                }
            }
        }
    }

    fn prompt_choice(
        &mut self,
        _label: &str,
        allowed: &[String],
        default: Option<&str>,
    ) -> Result<String> {
        loop {
            let answer = self.next_input()?;
            if answer.is_empty() {
                if let Some(default) = default {
                    return Ok(default.to_string());
                }
            }
            if allowed.iter().any(|choice| *choice == answer) {
                return Ok(answer);
            }
        }
    }
}
