//! Errors that end an update run
//!
//! Each variant is a separate failure domain with its own exit code, so a
//! broken build is never mistaken for a failed pull. A declined confirmation
//! is not an error (see [`Outcome::Declined`](crate::core::models::Outcome)).

use std::path::PathBuf;

use thiserror::Error;

/// Hard failures of an update run
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Not operating inside a version-controlled working copy
    #[error("not a git repository: {}", path.display())]
    NotARepository {
        /// Path that was searched
        path: PathBuf,
    },

    /// Refreshing remote metadata failed
    #[error("failed to fetch from upstream: {0}")]
    Network(String),

    /// Rebuilding the release artifact failed after the working copy was updated
    #[error("build failed: {0}")]
    Build(String),

    /// HEAD is not on a branch, so there is nothing to attach an upstream to
    #[error("HEAD is detached; check out a branch (e.g. `git switch {branch}`) and run the update again")]
    DetachedHead {
        /// Default branch suggested to the user
        branch: String,
    },

    /// A repository query or mutation failed
    #[error("git operation failed: {0}")]
    Vcs(String),

    /// Installing or uninstalling failed
    #[error("installation failed: {0}")]
    Install(String),

    /// Reading the user's answer failed
    #[error("could not read confirmation: {0}")]
    Prompt(String),
}

impl UpdateError {
    /// Process exit code for this failure
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotARepository { .. } => 2,
            Self::Network(_) => 3,
            Self::Build(_) => 4,
            Self::DetachedHead { .. } | Self::Vcs(_) | Self::Install(_) | Self::Prompt(_) => 1,
        }
    }

    pub(crate) fn vcs(err: &anyhow::Error) -> Self {
        Self::Vcs(format!("{err:#}"))
    }
}
