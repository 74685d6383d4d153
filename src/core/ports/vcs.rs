//! Version control system port
//!
//! Defines the operations reconciliation needs from the repository. Every
//! call takes the explicit [`WorkingCopy`] handle returned by `open`.

use std::path::Path;

use crate::core::models::{Revision, WorkingCopy};

/// Version control system abstraction
///
/// Implementations handle interactions with git or other VCS systems.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Locate the working copy containing `path`
    ///
    /// Fails when `path` is not inside a checkout.
    fn open(&self, path: &Path) -> anyhow::Result<WorkingCopy>;

    /// Current local revision (HEAD)
    fn local_revision(&self, wc: &WorkingCopy) -> anyhow::Result<Revision>;

    /// Revision of the upstream tracking reference, `None` if none is configured
    fn upstream_revision(&self, wc: &WorkingCopy) -> anyhow::Result<Option<Revision>>;

    /// Most recent common ancestor of two revisions, `None` if unrelated
    fn merge_base(
        &self,
        wc: &WorkingCopy,
        a: &Revision,
        b: &Revision,
    ) -> anyhow::Result<Option<Revision>>;

    /// Whether tracked files have uncommitted modifications
    fn has_local_changes(&self, wc: &WorkingCopy) -> anyhow::Result<bool>;

    /// Refresh remote metadata without merging
    fn fetch(&self, wc: &WorkingCopy) -> anyhow::Result<()>;

    /// Fast-forward the current branch to its upstream
    fn fast_forward_pull(&self, wc: &WorkingCopy) -> anyhow::Result<()>;

    /// Move the current branch, index and tree to `revision`, discarding changes
    fn hard_reset(&self, wc: &WorkingCopy, revision: &Revision) -> anyhow::Result<()>;

    /// Name of the checked-out branch, `None` on a detached HEAD
    fn current_branch(&self, wc: &WorkingCopy) -> anyhow::Result<Option<String>>;

    /// Fetch `branch` from `remote`, updating its remote-tracking ref only
    fn fetch_branch(&self, wc: &WorkingCopy, remote: &str, branch: &str) -> anyhow::Result<()>;

    /// Make `remote/branch` the upstream of the current branch
    ///
    /// Only branch configuration changes; HEAD and the tree stay where they are.
    fn set_upstream(&self, wc: &WorkingCopy, remote: &str, branch: &str) -> anyhow::Result<()>;
}
