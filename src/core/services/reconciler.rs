//! Reconciler - classify local vs upstream and pick an action
//!
//! This is pure business logic: no I/O, no prompting. The updater session
//! feeds it a freshly built [`RevisionTriple`] and acts on the result.

use crate::core::models::{Action, ReconciliationState, RevisionTriple};

/// Classify how the local revision relates to upstream
///
/// Rules, in priority order:
/// 1. No remote → `NoUpstream`
/// 2. `local == remote` → `UpToDate`
/// 3. `local == base` → `Behind`
/// 4. `remote == base` → `Ahead`
/// 5. Otherwise → `Diverged`
///
/// A missing base with a remote present (unrelated or damaged history) falls
/// through to `Diverged`.
#[must_use]
pub fn classify(triple: &RevisionTriple) -> ReconciliationState {
    let Some(remote) = &triple.remote else {
        return ReconciliationState::NoUpstream;
    };

    if triple.local == *remote {
        return ReconciliationState::UpToDate;
    }

    let Some(base) = &triple.base else {
        log::warn!(
            "no common ancestor between {} and {}; treating as diverged",
            triple.local,
            remote
        );
        return ReconciliationState::Diverged;
    };

    if triple.local == *base {
        ReconciliationState::Behind
    } else if remote == base {
        ReconciliationState::Ahead
    } else {
        ReconciliationState::Diverged
    }
}

/// Map a state to the action an update run takes
///
/// `Ahead` and `Diverged` both report divergence; the destructive reset
/// only happens once the user agrees (see [`Action::on_consent`]).
#[must_use]
pub const fn plan_action(state: ReconciliationState) -> Action {
    match state {
        ReconciliationState::NoUpstream => Action::PullDefaultBranch,
        ReconciliationState::UpToDate => Action::None,
        ReconciliationState::Behind => Action::FastForwardPull,
        ReconciliationState::Ahead | ReconciliationState::Diverged => Action::ReportDivergence,
    }
}
