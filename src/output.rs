//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Action, Outcome, ReconciliationState, StatusReport, UpdateReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn colored_state(state: ReconciliationState) -> colored::ColoredString {
    let text = state.describe();
    match state {
        ReconciliationState::UpToDate => text.green(),
        ReconciliationState::Behind => text.cyan(),
        ReconciliationState::NoUpstream => text.yellow(),
        ReconciliationState::Ahead | ReconciliationState::Diverged => text.red(),
    }
}

/// One-line explanation of what an update run would do
#[must_use]
pub const fn action_hint(action: Action) -> &'static str {
    match action {
        Action::None => "nothing to pull",
        Action::PullDefaultBranch => "would offer to pull from the default branch",
        Action::FastForwardPull => "would fast-forward",
        Action::ForceResetToRemote | Action::ReportDivergence => {
            "would offer to reset to upstream (local commits discarded)"
        },
    }
}

impl UpdateReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        if let Some(state) = self.state {
            println!("Repository: {} ({})", self.workdir.display(), colored_state(state));
        }

        match self.outcome {
            Outcome::Declined { .. } => {
                println!("{}", "Aborted. No changes were made.".yellow());
            },
            Outcome::UpToDate => {
                println!("{}", "Already up to date.".green());
            },
            Outcome::Rebuilt => {
                println!("{}", "Rebuilt without changes.".green());
            },
            Outcome::Updated => {
                if let (Some(before), Some(after)) = (&self.before, &self.after) {
                    println!("Updated {before} -> {after}");
                }
                println!("{}", "Update complete.".green().bold());
            },
        }

        if let Some(installed) = &self.installed {
            println!("Installed to {}", installed.display());
        }
    }
}

impl StatusReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        println!("Repository: {}", self.workdir.display());
        println!("State:      {}", colored_state(self.state));
        println!("Local:      {}", self.triple.local);
        if let Some(remote) = &self.triple.remote {
            println!("Upstream:   {remote}");
        }
        if let Some(base) = &self.triple.base {
            println!("Base:       {base}");
        }
        if self.dirty {
            println!("{}", "Uncommitted changes present.".yellow());
        }
        if !self.fetched && self.triple.remote.is_some() {
            println!("{}", "(upstream not refreshed)".dimmed());
        }
        println!("Next:       {}", action_hint(self.planned));
    }
}

/// Result of an install or uninstall
#[derive(Debug, Serialize)]
pub struct InstallResult {
    /// Whether anything was changed
    pub changed: bool,
    /// Files and directories created or removed
    pub paths: Vec<PathBuf>,
    /// Human-readable summary
    pub message: String,
}

impl InstallResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{}", self.message);
                for path in &self.paths {
                    println!("  {}", path.display());
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}
