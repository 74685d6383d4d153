//! Uninstall command - remove what `install` put in place

use rtimer_update::UpdateError;
use rtimer_update::adapters::{DesktopInstaller, TerminalPrompt};
use rtimer_update::config::UpdaterConfig;
use rtimer_update::core::models::Confirmation;
use rtimer_update::core::ports::{Installer, Prompt};
use rtimer_update::output::{InstallResult, OutputMode};

/// Remove the installation, asking first
pub fn uninstall(purge: bool, config: &UpdaterConfig, mode: OutputMode) -> anyhow::Result<()> {
    let installer = DesktopInstaller::from_config(config);
    let mut prompt = TerminalPrompt::from_env();

    if !prompt.confirm(&Confirmation::Uninstall)? {
        InstallResult {
            changed: false,
            paths: Vec::new(),
            message: "Aborted. Nothing was removed.".to_string(),
        }
        .render(mode);
        return Ok(());
    }

    let purge = purge
        && prompt.confirm(&Confirmation::RemoveConfig { path: installer.app_config_dir() })?;

    let removed =
        installer.uninstall(purge).map_err(|e| UpdateError::Install(format!("{e:#}")))?;

    let message = if removed.is_empty() {
        format!("{} is not installed.", config.app.name)
    } else {
        format!("Removed {}", config.app.name)
    };
    InstallResult { changed: !removed.is_empty(), paths: removed, message }.render(mode);
    Ok(())
}
