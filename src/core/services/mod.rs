//! Business logic services
//!
//! - [`reconciler`] - Pure classification of local vs upstream, and action planning
//! - [`updater`] - Sequential update run over the port traits

pub mod reconciler;
pub mod updater;

pub use reconciler::{classify, plan_action};
pub use updater::{UpstreamDefaults, Updater, inspect};
