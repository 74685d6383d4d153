//! Working copy handle
//!
//! Passed explicitly into every collaborator call so nothing depends on the
//! process's current directory.

use std::path::{Path, PathBuf};

/// A local checkout of the project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy {
    root: PathBuf,
}

impl WorkingCopy {
    /// Wrap the root directory of a checkout
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Top-level directory of the checkout
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path relative to the checkout root
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
