//! Results of an update run or a status inspection

use std::path::PathBuf;

use serde::Serialize;

use super::{Action, ReconciliationState, Revision, RevisionTriple};

/// How an update run ended (successful runs only; failures are errors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// The user answered "no" at a gate; nothing was changed from there on
    Declined {
        /// Tag of the confirmation that was declined
        at: &'static str,
    },
    /// Nothing to do and no rebuild requested
    UpToDate,
    /// The working copy moved and the artifact was rebuilt
    Updated,
    /// The working copy did not move but the artifact was rebuilt on request
    Rebuilt,
}

/// Summary of a completed update run
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    /// Root of the working copy
    pub workdir: PathBuf,
    /// Classified state, if the run got that far
    pub state: Option<ReconciliationState>,
    /// Action planned for the state
    pub planned: Option<Action>,
    /// Action actually executed against the working copy
    pub executed: Option<Action>,
    /// Local revision before the run
    pub before: Option<Revision>,
    /// Local revision after the run
    pub after: Option<Revision>,
    /// Whether the release artifact was rebuilt
    pub built: bool,
    /// Installed binary path, when a reinstall happened
    pub installed: Option<PathBuf>,
    /// How the run ended
    pub outcome: Outcome,
    /// When the run finished (RFC3339)
    pub finished_at: String,
}

impl UpdateReport {
    /// Start a report for a working copy; fields are filled in as the run proceeds
    #[must_use]
    pub fn begin(workdir: PathBuf) -> Self {
        Self {
            workdir,
            state: None,
            planned: None,
            executed: None,
            before: None,
            after: None,
            built: false,
            installed: None,
            outcome: Outcome::UpToDate,
            finished_at: String::new(),
        }
    }

    /// Seal the report with its outcome and completion time
    #[must_use]
    pub fn finish(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self.finished_at = chrono::Utc::now().to_rfc3339();
        self
    }

    /// Whether the run ended at a declined confirmation
    #[must_use]
    pub const fn was_declined(&self) -> bool {
        matches!(self.outcome, Outcome::Declined { .. })
    }
}

/// Read-only snapshot of the reconciliation state
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Root of the working copy
    pub workdir: PathBuf,
    /// Whether uncommitted modifications exist
    pub dirty: bool,
    /// Whether remote metadata was refreshed before classifying
    pub fetched: bool,
    /// The revisions that were compared
    pub triple: RevisionTriple,
    /// Classified state
    pub state: ReconciliationState,
    /// Action an update run would plan
    pub planned: Action,
}
