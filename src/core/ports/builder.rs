//! Build port
//!
//! Rebuilds the release artifact from a working copy.

use crate::core::models::WorkingCopy;

/// Release build abstraction
#[cfg_attr(test, mockall::automock)]
pub trait Builder: Send + Sync {
    /// Rebuild the release artifact
    ///
    /// Compiler output goes straight to the user; an error means the build
    /// did not succeed.
    fn rebuild(&self, wc: &WorkingCopy) -> anyhow::Result<()>;
}
