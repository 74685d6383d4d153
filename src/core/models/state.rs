//! Reconciliation states
//!
//! Derived from a [`RevisionTriple`](super::RevisionTriple) on every run and
//! never persisted.

use serde::Serialize;

/// Relationship between the local working copy and its upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationState {
    /// No upstream tracking reference exists
    NoUpstream,
    /// Local and remote point at the same revision
    UpToDate,
    /// Remote has commits local lacks; a fast-forward exists
    Behind,
    /// Local has commits remote lacks
    Ahead,
    /// Both sides moved independently since the common ancestor
    Diverged,
}

impl ReconciliationState {
    /// Short human description
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::NoUpstream => "no upstream tracking branch",
            Self::UpToDate => "up to date with upstream",
            Self::Behind => "behind upstream",
            Self::Ahead => "ahead of upstream",
            Self::Diverged => "diverged from upstream",
        }
    }
}

impl std::fmt::Display for ReconciliationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUpstream => write!(f, "no-upstream"),
            Self::UpToDate => write!(f, "up-to-date"),
            Self::Behind => write!(f, "behind"),
            Self::Ahead => write!(f, "ahead"),
            Self::Diverged => write!(f, "diverged"),
        }
    }
}
