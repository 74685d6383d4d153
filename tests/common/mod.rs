//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Scripted port implementations
//! - `git_repo.rs` - Temporary repositories with a bare upstream

pub mod fixtures;
pub mod git_repo;
