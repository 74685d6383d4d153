//! Core domain logic for rtimer-update
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Revision, ReconciliationState, Action, Confirmation)
//! - `services/` - Reconciliation and the update session
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
