//! Remedial actions selected by the reconciler

use serde::Serialize;

/// What to do about a given reconciliation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Nothing to do
    None,
    /// Track the configured default remote branch, then pull from it
    PullDefaultBranch,
    /// Fast-forward local to upstream
    FastForwardPull,
    /// Discard local history and move to the upstream revision
    ForceResetToRemote,
    /// Tell the user histories differ; becomes a forced reset on consent
    ReportDivergence,
}

impl Action {
    /// Whether the user must agree before this action runs
    #[must_use]
    pub const fn requires_confirmation(self) -> bool {
        matches!(self, Self::PullDefaultBranch | Self::ForceResetToRemote | Self::ReportDivergence)
    }

    /// Whether running this action can lose local commits or edits
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(self, Self::ForceResetToRemote | Self::ReportDivergence)
    }

    /// Whether running this action moves HEAD or rewrites the tree
    ///
    /// `PullDefaultBranch` only attaches an upstream; the pull itself is the
    /// fast-forward (or gated reset) planned against it afterwards.
    #[must_use]
    pub const fn mutates_working_copy(self) -> bool {
        matches!(self, Self::FastForwardPull | Self::ForceResetToRemote)
    }

    /// The action actually executed once the user has agreed
    #[must_use]
    pub const fn on_consent(self) -> Self {
        match self {
            Self::ReportDivergence => Self::ForceResetToRemote,
            other => other,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::PullDefaultBranch => write!(f, "pull-default-branch"),
            Self::FastForwardPull => write!(f, "fast-forward-pull"),
            Self::ForceResetToRemote => write!(f, "force-reset-to-remote"),
            Self::ReportDivergence => write!(f, "report-divergence"),
        }
    }
}
