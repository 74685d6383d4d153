//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `git/` - Repository queries and updates (`VersionControl`)
//! - `cargo/` - Release build subprocess (`Builder`)
//! - `desktop/` - Per-user binary, menu entry and icon (`Installer`)
//! - `terminal/` - Yes/no questions on stdin/stderr (`Prompt`)

pub mod cargo;
pub mod desktop;
pub mod git;
pub mod terminal;

pub use cargo::CargoBuilder;
pub use desktop::DesktopInstaller;
pub use git::GitVersionControl;
pub use terminal::TerminalPrompt;
