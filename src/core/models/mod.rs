//! Domain models for rtimer-update
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Revision`] / [`RevisionTriple`] - What reconciliation compares
//! - [`ReconciliationState`] - How local relates to upstream
//! - [`Action`] - What to do about it
//! - [`Confirmation`] - Questions asked before state-changing steps
//! - [`UpdateReport`] / [`StatusReport`] - Results handed back to the CLI
//! - [`WorkingCopy`] - Explicit handle on the local checkout

mod action;
mod confirmation;
mod report;
mod revision;
mod state;
mod working_copy;

pub use action::Action;
pub use confirmation::Confirmation;
pub use report::{Outcome, StatusReport, UpdateReport};
pub use revision::{Revision, RevisionTriple};
pub use state::ReconciliationState;
pub use working_copy::WorkingCopy;
