//! Git integration adapter
//!
//! Implements `VersionControl` for a git checkout.
//!
//! - [`refs`] - Revision queries and hard reset via libgit2
//! - [`remote`] - Fetch, fast-forward and upstream config via the `git` CLI, so the
//!   user's credential helpers and SSH config apply unchanged

pub mod refs;
pub mod remote;

use std::path::Path;

use anyhow::Context;
use git2::Repository;

use crate::core::models::{Revision, WorkingCopy};
use crate::core::ports::VersionControl;

/// Git-based version control implementation
///
/// Stateless: every call reopens the repository at the working copy root.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVersionControl;

impl GitVersionControl {
    /// Create a new git version control adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn repository(wc: &WorkingCopy) -> anyhow::Result<Repository> {
    Repository::open(wc.root())
        .with_context(|| format!("failed to open repository at {}", wc.root().display()))
}

impl VersionControl for GitVersionControl {
    fn open(&self, path: &Path) -> anyhow::Result<WorkingCopy> {
        let repo = Repository::discover(path)?;
        let Some(workdir) = repo.workdir() else {
            anyhow::bail!("{} is a bare repository", path.display());
        };
        log::debug!("working copy at {}", workdir.display());
        Ok(WorkingCopy::new(workdir.to_path_buf()))
    }

    fn local_revision(&self, wc: &WorkingCopy) -> anyhow::Result<Revision> {
        refs::head_revision(&repository(wc)?)
    }

    fn upstream_revision(&self, wc: &WorkingCopy) -> anyhow::Result<Option<Revision>> {
        refs::upstream_revision(&repository(wc)?)
    }

    fn merge_base(
        &self,
        wc: &WorkingCopy,
        a: &Revision,
        b: &Revision,
    ) -> anyhow::Result<Option<Revision>> {
        refs::merge_base(&repository(wc)?, a, b)
    }

    fn has_local_changes(&self, wc: &WorkingCopy) -> anyhow::Result<bool> {
        refs::has_tracked_changes(&repository(wc)?)
    }

    fn fetch(&self, wc: &WorkingCopy) -> anyhow::Result<()> {
        remote::fetch(wc.root())
    }

    fn fast_forward_pull(&self, wc: &WorkingCopy) -> anyhow::Result<()> {
        remote::fast_forward(wc.root())
    }

    fn hard_reset(&self, wc: &WorkingCopy, revision: &Revision) -> anyhow::Result<()> {
        refs::hard_reset(&repository(wc)?, revision)
    }

    fn current_branch(&self, wc: &WorkingCopy) -> anyhow::Result<Option<String>> {
        refs::current_branch(&repository(wc)?)
    }

    fn fetch_branch(&self, wc: &WorkingCopy, remote: &str, branch: &str) -> anyhow::Result<()> {
        remote::fetch_branch(wc.root(), remote, branch)
    }

    fn set_upstream(&self, wc: &WorkingCopy, remote: &str, branch: &str) -> anyhow::Result<()> {
        remote::set_upstream(wc.root(), remote, branch)
    }
}
