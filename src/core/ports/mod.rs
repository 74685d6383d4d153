//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (git, the compiler, the desktop, the terminal).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod builder;
mod installer;
mod prompt;
mod vcs;

pub use builder::Builder;
pub use installer::Installer;
pub use prompt::Prompt;
pub use vcs::VersionControl;

#[cfg(test)]
pub(crate) use builder::MockBuilder;
#[cfg(test)]
pub(crate) use installer::MockInstaller;
#[cfg(test)]
pub(crate) use prompt::MockPrompt;
#[cfg(test)]
pub(crate) use vcs::MockVersionControl;
