//! Terminal prompt adapter
//!
//! Implements `Prompt` on stdin/stderr. Questions go to stderr so `--json`
//! output on stdout stays parseable.

use std::env;
use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::core::models::Confirmation;
use crate::core::ports::Prompt;

/// Environment variable forcing interactive (`1`) or non-interactive (`0`) prompting
pub const INTERACTIVE_ENV: &str = "RTIMER_UPDATE_INTERACTIVE";

/// Yes/no prompt on the controlling terminal
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    /// Prompt that reads answers when the environment allows it
    #[must_use]
    pub fn from_env() -> Self {
        let override_var = env::var(INTERACTIVE_ENV).ok();
        Self {
            interactive: is_interactive(override_var.as_deref(), env::var_os("CI").is_some()),
        }
    }

    /// Prompt with explicit interactivity
    #[must_use]
    pub const fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

/// Decide whether prompts may read from stdin
///
/// The override variable wins; otherwise CI environments are non-interactive.
#[must_use]
pub fn is_interactive(override_var: Option<&str>, ci: bool) -> bool {
    match override_var {
        Some(value) => value != "0",
        None => !ci,
    }
}

/// Interpret an answer; only an explicit yes counts
#[must_use]
pub fn parse_answer(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Write `question` to `out` and read one answer line from `input`
///
/// End of input counts as "no".
pub fn ask<R: BufRead, W: Write>(
    question: &Confirmation,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    write!(out, "{} {} {} ", "?".cyan().bold(), question, "[y/N]".dimmed())?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    Ok(parse_answer(&line))
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &Confirmation) -> anyhow::Result<bool> {
        if !self.interactive {
            eprintln!("  (non-interactive: answering no to \"{question}\")");
            return Ok(false);
        }

        let stdin = io::stdin();
        let answer = ask(question, &mut stdin.lock(), &mut io::stderr())?;
        log::debug!("{} -> {answer}", question.tag());
        Ok(answer)
    }
}
