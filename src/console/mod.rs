//! Styled console port for gitmate.
//!
//! Workflows talk to the terminal through the `Console` trait so they can
//! be exercised in tests with a scripted double instead of a live TTY.
//! `TermConsole` is the production implementation: `colored` for styled
//! output, `dialoguer` for the prompts.

use colored::Colorize;
use dialoguer::Input;

use crate::error::{GitmateError, Result};

/// Output styles, matching the original theme: info = cyan,
/// success = bold green, warning = magenta, danger = bold red,
/// highlight = bold yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Info,
    Success,
    Warning,
    Danger,
    Highlight,
}

/// Terminal I/O port used by all workflows.
///
/// Prompt methods re-prompt on invalid input and only fail when the input
/// stream is closed before an acceptable answer arrives.
pub trait Console {
    /// Print a single styled status line.
    fn print(&mut self, text: &str, style: Style);

    /// Render a numbered table: column 1 is the 1-based index,
    /// column 2 the row text.
    fn render_table(&mut self, title: &str, rows: &[String]);

    /// Prompt for free text. An empty answer resolves to `default` when
    /// one is given.
    fn prompt_text(&mut self, label: &str, default: Option<&str>) -> Result<String>;

    /// Prompt for an integer in `[1, max]`, re-prompting on non-numeric
    /// or out-of-range input.
    fn prompt_index(&mut self, label: &str, max: usize) -> Result<usize>;

    /// Prompt for one of `allowed`, re-prompting until an allowed value
    /// (or an empty answer with a `default`) is entered.
    fn prompt_choice(
        &mut self,
        label: &str,
        allowed: &[String],
        default: Option<&str>,
    ) -> Result<String>;
}

/// Display a numbered option table and return the chosen option.
///
/// Pure over the option list; no state is retained between calls.
pub fn choose_option(console: &mut dyn Console, label: &str, options: &[String]) -> Result<String> {
    console.render_table(label, options);
    let index = console.prompt_index(&format!("Enter {} number", label), options.len())?;
    Ok(options[index - 1].clone())
}

/// Production console: `colored` output, `dialoguer` prompts.
pub struct TermConsole;

impl TermConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn print(&mut self, text: &str, style: Style) {
        let styled = match style {
            Style::Info => text.dimmed().cyan(),
            Style::Success => text.green().bold(),
            Style::Warning => text.magenta(),
            Style::Danger => text.red().bold(),
            Style::Highlight => text.yellow().bold(),
        };
        println!("{}", styled);
    }

    fn render_table(&mut self, title: &str, rows: &[String]) {
        println!("{}", title.cyan().bold());
        for (i, row) in rows.iter().enumerate() {
            println!("  {} {}", format!("{}.", i + 1).magenta(), row);
        }
    }

    fn prompt_text(&mut self, label: &str, default: Option<&str>) -> Result<String> {
        let input = Input::<String>::new().with_prompt(label).allow_empty(true);
        let input = match default {
            Some(default) => input.default(default.to_string()),
            None => input,
        };
        input.interact_text().map_err(prompt_failed)
    }

    fn prompt_index(&mut self, label: &str, max: usize) -> Result<usize> {
        // dialoguer re-prompts on parse failure and on validation failure.
        Input::<usize>::new()
            .with_prompt(label)
            .validate_with(|n: &usize| -> std::result::Result<(), String> {
                if *n >= 1 && *n <= max {
                    Ok(())
                } else {
                    Err(format!("Please enter a number between 1 and {}.", max))
                }
            })
            .interact_text()
            .map_err(prompt_failed)
    }

    fn prompt_choice(
        &mut self,
        label: &str,
        allowed: &[String],
        default: Option<&str>,
    ) -> Result<String> {
        let input = Input::<String>::new().with_prompt(label).validate_with(
            |answer: &String| -> std::result::Result<(), String> {
                if allowed.iter().any(|choice| choice == answer) {
                    Ok(())
                } else {
                    Err("Please select one of the listed values.".to_string())
                }
            },
        );
        let input = match default {
            Some(default) => input.default(default.to_string()),
            None => input,
        };
        input.interact_text().map_err(prompt_failed)
    }
}

fn prompt_failed(err: dialoguer::Error) -> GitmateError {
    GitmateError::UserError(format!("failed to read input: {}", err))
}
