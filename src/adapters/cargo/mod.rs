//! Release build adapter
//!
//! Implements `Builder` by running the configured build command (by default
//! `cargo build --release`) in the working copy. Output is inherited, so
//! compiler diagnostics reach the terminal exactly as the compiler wrote them.

use std::process::Command;

use anyhow::Context;

use crate::config::BuildConfig;
use crate::core::models::WorkingCopy;
use crate::core::ports::Builder;

/// Subprocess-based release builder
#[derive(Debug, Clone)]
pub struct CargoBuilder {
    program: String,
    args: Vec<String>,
}

impl CargoBuilder {
    /// Build with an explicit command line
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// Build with the command from configuration
    #[must_use]
    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    /// The command line as shown to the user
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CargoBuilder {
    fn default() -> Self {
        Self::from_config(&BuildConfig::default())
    }
}

impl Builder for CargoBuilder {
    fn rebuild(&self, wc: &WorkingCopy) -> anyhow::Result<()> {
        let cmdline = self.command_line();
        log::debug!("running `{cmdline}` in {}", wc.root().display());

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(wc.root())
            .status()
            .with_context(|| format!("failed to start `{cmdline}`"))?;

        if !status.success() {
            anyhow::bail!("`{cmdline}` exited with {status}");
        }
        Ok(())
    }
}
