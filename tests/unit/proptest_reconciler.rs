//! Property-based tests for the reconciler
//!
//! Uses proptest to verify classification rules hold for arbitrary revisions.

use proptest::prelude::*;
use rtimer_update::core::models::{Action, ReconciliationState, Revision, RevisionTriple};
use rtimer_update::core::services::{classify, plan_action};

fn rev() -> impl Strategy<Value = Revision> {
    "[0-9a-f]{7,40}".prop_map(Revision::new)
}

proptest! {
    /// No remote means no upstream, whatever local and base are
    #[test]
    fn missing_remote_is_no_upstream(local in rev(), base in proptest::option::of(rev())) {
        let triple = RevisionTriple::new(local, None, base);
        prop_assert_eq!(classify(&triple), ReconciliationState::NoUpstream);
    }

    /// Identical local and remote are up to date
    #[test]
    fn equal_local_remote_is_up_to_date(local in rev(), base in proptest::option::of(rev())) {
        let triple = RevisionTriple::new(local.clone(), Some(local), base);
        prop_assert_eq!(classify(&triple), ReconciliationState::UpToDate);
    }

    /// Local at the base with a different remote is behind
    #[test]
    fn local_at_base_is_behind(local in rev(), remote in rev()) {
        prop_assume!(local != remote);
        let triple = RevisionTriple::new(local.clone(), Some(remote), Some(local));
        prop_assert_eq!(classify(&triple), ReconciliationState::Behind);
    }

    /// Remote at the base with a different local is ahead
    #[test]
    fn remote_at_base_is_ahead(local in rev(), remote in rev()) {
        prop_assume!(local != remote);
        let triple = RevisionTriple::new(local, Some(remote.clone()), Some(remote));
        prop_assert_eq!(classify(&triple), ReconciliationState::Ahead);
    }

    /// Pairwise distinct revisions are diverged
    #[test]
    fn distinct_revisions_are_diverged(local in rev(), remote in rev(), base in rev()) {
        prop_assume!(local != remote && local != base && remote != base);
        let triple = RevisionTriple::new(local, Some(remote), Some(base));
        prop_assert_eq!(classify(&triple), ReconciliationState::Diverged);
    }

    /// A missing base with a distinct remote is treated as diverged
    #[test]
    fn missing_base_is_diverged(local in rev(), remote in rev()) {
        prop_assume!(local != remote);
        let triple = RevisionTriple::new(local, Some(remote), None);
        prop_assert_eq!(classify(&triple), ReconciliationState::Diverged);
    }

    /// Classification is deterministic
    #[test]
    fn classify_is_deterministic(
        local in rev(),
        remote in proptest::option::of(rev()),
        base in proptest::option::of(rev()),
    ) {
        let triple = RevisionTriple::new(local, remote, base);
        let before = triple.clone();
        prop_assert_eq!(classify(&triple), classify(&triple));
        prop_assert_eq!(triple, before);
    }

    /// Only the destructive states plan a confirmation-gated reset
    #[test]
    fn reset_only_for_ahead_or_diverged(
        local in rev(),
        remote in proptest::option::of(rev()),
        base in proptest::option::of(rev()),
    ) {
        let state = classify(&RevisionTriple::new(local, remote, base));
        let action = plan_action(state);
        let resets = action.on_consent() == Action::ForceResetToRemote;
        prop_assert_eq!(
            resets,
            matches!(state, ReconciliationState::Ahead | ReconciliationState::Diverged)
        );
        if resets {
            prop_assert!(action.requires_confirmation());
        }
    }
}
