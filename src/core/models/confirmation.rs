//! Questions asked at confirmation gates
//!
//! Every gate defaults to "no": an empty answer never changes anything.

use std::path::PathBuf;

use super::{ReconciliationState, Revision};

/// A yes/no question put to the user before a state-changing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The working copy has uncommitted modifications
    ProceedWithLocalChanges,
    /// No upstream is configured; pull from the default branch instead
    PullDefaultBranch {
        /// Remote name
        remote: String,
        /// Branch name on that remote
        branch: String,
    },
    /// Already up to date; rebuild anyway
    ForceRebuild,
    /// Overwrite local history with the upstream revision
    ForceReset {
        /// Why a reset is being offered (ahead or diverged)
        state: ReconciliationState,
        /// Revision that will be abandoned
        local: Revision,
        /// Revision that will be checked out
        remote: Revision,
    },
    /// A previous installation exists; replace it with the new build
    Reinstall {
        /// Installed binary that will be replaced
        target: PathBuf,
    },
    /// Remove the installed binary, desktop entry and icon
    Uninstall,
    /// Also remove the application's configuration
    RemoveConfig {
        /// Directory that will be deleted
        path: PathBuf,
    },
}

impl Confirmation {
    /// Short machine-readable tag, used when reporting where a run stopped
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::ProceedWithLocalChanges => "local_changes",
            Self::PullDefaultBranch { .. } => "pull_default_branch",
            Self::ForceRebuild => "force_rebuild",
            Self::ForceReset { .. } => "force_reset",
            Self::Reinstall { .. } => "reinstall",
            Self::Uninstall => "uninstall",
            Self::RemoveConfig { .. } => "remove_config",
        }
    }

    /// The question text shown to the user
    #[must_use]
    pub fn question(&self) -> String {
        match self {
            Self::ProceedWithLocalChanges => {
                "You have uncommitted changes that a pull or reset may discard. Continue?"
                    .to_string()
            },
            Self::PullDefaultBranch { remote, branch } => {
                format!("No upstream branch is set. Pull from {remote}/{branch}?")
            },
            Self::ForceRebuild => "Already up to date. Rebuild anyway?".to_string(),
            Self::ForceReset { state, local, remote } => format!(
                "Local branch is {} ({local} vs {remote}). Reset to {remote}? \
                 Local-only commits will be discarded.",
                state.describe()
            ),
            Self::Reinstall { target } => {
                format!("Existing installation found at {}. Reinstall?", target.display())
            },
            Self::Uninstall => "Remove the installed binary, menu entry and icon?".to_string(),
            Self::RemoveConfig { path } => {
                format!("Also remove configuration in {}?", path.display())
            },
        }
    }
}

impl std::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.question())
    }
}
