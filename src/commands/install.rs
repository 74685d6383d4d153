//! Install command - install the artifact already built in the checkout

use std::path::Path;

use rtimer_update::UpdateError;
use rtimer_update::adapters::{DesktopInstaller, GitVersionControl};
use rtimer_update::config::UpdaterConfig;
use rtimer_update::core::ports::{Installer, VersionControl};
use rtimer_update::output::{InstallResult, OutputMode};

/// Install from the working copy containing `repo`
pub fn install(repo: &Path, config: &UpdaterConfig, mode: OutputMode) -> anyhow::Result<()> {
    let wc = GitVersionControl::new()
        .open(repo)
        .map_err(|_| UpdateError::NotARepository { path: repo.to_path_buf() })?;

    let installer = DesktopInstaller::from_config(config);
    let binary = installer.install(&wc).map_err(|e| UpdateError::Install(format!("{e:#}")))?;

    InstallResult {
        changed: true,
        message: format!("Installed {}", config.app.name),
        paths: vec![binary, installer.entry_path()],
    }
    .render(mode);
    Ok(())
}
