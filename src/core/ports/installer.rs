//! Installer port
//!
//! Places a built artifact where the desktop can find it, and takes it away
//! again.

use std::path::PathBuf;

use crate::core::models::WorkingCopy;

/// Installation abstraction
#[cfg_attr(test, mockall::automock)]
pub trait Installer: Send + Sync {
    /// Path of the installed binary, if a previous installation exists
    fn installed_binary(&self) -> Option<PathBuf>;

    /// Directory holding the application's own configuration
    fn app_config_dir(&self) -> PathBuf;

    /// Install the artifact built from `wc`, returning the installed binary path
    fn install(&self, wc: &WorkingCopy) -> anyhow::Result<PathBuf>;

    /// Remove everything `install` created; returns the paths removed
    fn uninstall(&self, purge_config: bool) -> anyhow::Result<Vec<PathBuf>>;
}
