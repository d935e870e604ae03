//! Interactive prompting capability.
//!
//! Prompting is a UI concern, not decision logic: the shell asks questions
//! through the [`Prompt`] trait so tests can drive the interactive flow with
//! fixed answers instead of a terminal.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Answer to the "update available" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateChoice {
    /// Install the latest version.
    Upgrade,
    /// Ask for an older version to install.
    Downgrade,
    /// Do nothing.
    Cancel,
}

/// Capability to ask the user questions: given choices, return a selection.
pub trait Prompt {
    /// Ask a yes/no question.
    fn confirm(&self, question: &str) -> Result<bool>;

    /// Ask whether to upgrade, downgrade, or cancel.
    fn update_choice(&self) -> Result<UpdateChoice>;

    /// Ask for a version string; `None` means the user left it blank.
    fn ask_version(&self, question: &str) -> Result<Option<String>>;
}

/// Console-backed prompt reading answers from stdin.
pub struct ConsolePrompt;

impl ConsolePrompt {
    fn read_line(prompt_text: &str) -> Result<String> {
        print!("{}", prompt_text.bold());
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    }
}

impl Prompt for ConsolePrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        let answer = Self::read_line(&format!("{question} (y/n): "))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn update_choice(&self) -> Result<UpdateChoice> {
        let answer =
            Self::read_line("Do you want to upgrade (u), downgrade (d), or cancel (c)? ")?;
        Ok(match answer.to_ascii_lowercase().as_str() {
            "u" => UpdateChoice::Upgrade,
            "d" => UpdateChoice::Downgrade,
            _ => UpdateChoice::Cancel,
        })
    }

    fn ask_version(&self, question: &str) -> Result<Option<String>> {
        let answer = Self::read_line(&format!("{question}: "))?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }
}
