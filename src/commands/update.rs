//! Update command - reconcile with upstream, rebuild, reinstall

use std::path::Path;

use rtimer_update::adapters::{CargoBuilder, DesktopInstaller, GitVersionControl, TerminalPrompt};
use rtimer_update::config::UpdaterConfig;
use rtimer_update::core::services::Updater;
use rtimer_update::output::OutputMode;

/// Run the update procedure on the working copy containing `repo`
pub fn update(repo: &Path, config: &UpdaterConfig, mode: OutputMode) -> anyhow::Result<()> {
    let vcs = GitVersionControl::new();
    let builder = CargoBuilder::from_config(&config.build);
    let installer = DesktopInstaller::from_config(config);
    let mut prompt = TerminalPrompt::from_env();

    let report = Updater::new(&vcs, &builder, &installer, &mut prompt, config.upstream_defaults())
        .run(repo)?;

    report.render(mode);
    Ok(())
}
