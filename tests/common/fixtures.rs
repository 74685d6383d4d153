//! Scripted port implementations for driving the updater in tests

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rtimer_update::core::models::{Confirmation, WorkingCopy};
use rtimer_update::core::ports::{Builder, Installer, Prompt};

/// Answers questions from a script; "no" once the script runs out
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    /// Every question asked, in order
    pub asked: Vec<Confirmation>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }

    pub fn always_no() -> Self {
        Self::new(&[])
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &Confirmation) -> anyhow::Result<bool> {
        self.asked.push(question.clone());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

/// Counts rebuilds, optionally failing every one
#[derive(Debug, Default)]
pub struct CountingBuilder {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingBuilder {
    pub fn failing() -> Self {
        Self { calls: AtomicUsize::new(0), fail: true }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Builder for CountingBuilder {
    fn rebuild(&self, _wc: &WorkingCopy) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("error[E0425]: cannot find value `x` in this scope");
        }
        Ok(())
    }
}

/// An installer for a machine where nothing was ever installed
#[derive(Debug, Default)]
pub struct NotInstalled;

impl Installer for NotInstalled {
    fn installed_binary(&self) -> Option<PathBuf> {
        None
    }

    fn app_config_dir(&self) -> PathBuf {
        PathBuf::from("/nonexistent/rtimer")
    }

    fn install(&self, _wc: &WorkingCopy) -> anyhow::Result<PathBuf> {
        anyhow::bail!("install should not be called")
    }

    fn uninstall(&self, _purge_config: bool) -> anyhow::Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}
