//! Parameterized tests using test-case
//!
//! The reconciliation scenarios and the full state/action table.

use rtimer_update::core::models::{Action, ReconciliationState, Revision, RevisionTriple};
use rtimer_update::core::services::{classify, plan_action};
use test_case::test_case;

fn triple(local: &str, remote: Option<&str>, base: Option<&str>) -> RevisionTriple {
    RevisionTriple::new(Revision::new(local), remote.map(Revision::new), base.map(Revision::new))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test_case("c1", Some("c1"), Some("c1"), ReconciliationState::UpToDate ; "scenario a up to date")]
#[test_case("c1", Some("c3"), Some("c1"), ReconciliationState::Behind ; "scenario b behind")]
#[test_case("c3", Some("c1"), Some("c1"), ReconciliationState::Ahead ; "scenario c ahead")]
#[test_case("c2", Some("c3"), Some("c1"), ReconciliationState::Diverged ; "scenario d diverged")]
#[test_case("c1", None, None, ReconciliationState::NoUpstream ; "scenario e no upstream")]
#[test_case("c1", Some("c2"), None, ReconciliationState::Diverged ; "unrelated histories")]
fn test_classify(local: &str, remote: Option<&str>, base: Option<&str>, expected: ReconciliationState) {
    assert_eq!(classify(&triple(local, remote, base)), expected);
}

// =============================================================================
// Action table
// =============================================================================

#[test_case(ReconciliationState::NoUpstream, Action::PullDefaultBranch, true, false ; "no upstream")]
#[test_case(ReconciliationState::UpToDate, Action::None, false, false ; "up to date")]
#[test_case(ReconciliationState::Behind, Action::FastForwardPull, false, false ; "behind")]
#[test_case(ReconciliationState::Ahead, Action::ReportDivergence, true, true ; "ahead")]
#[test_case(ReconciliationState::Diverged, Action::ReportDivergence, true, true ; "diverged")]
fn test_plan_action(
    state: ReconciliationState,
    expected: Action,
    gated: bool,
    destructive: bool,
) {
    let action = plan_action(state);
    assert_eq!(action, expected);
    assert_eq!(action.requires_confirmation(), gated);
    assert_eq!(action.is_destructive(), destructive);
}

#[test]
fn test_up_to_date_action_never_mutates() {
    assert!(!plan_action(ReconciliationState::UpToDate).mutates_working_copy());
}

#[test_case(Action::FastForwardPull, true ; "fast forward moves head")]
#[test_case(Action::ReportDivergence, true ; "consented divergence resets")]
#[test_case(Action::PullDefaultBranch, false ; "default branch only attaches upstream")]
#[test_case(Action::None, false ; "nothing to do")]
fn test_consented_action_mutation(planned: Action, mutates: bool) {
    assert_eq!(planned.on_consent().mutates_working_copy(), mutates);
}
