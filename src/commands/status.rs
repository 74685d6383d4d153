//! Status command - show the reconciliation state without changing anything

use std::path::Path;

use rtimer_update::adapters::GitVersionControl;
use rtimer_update::core::services::inspect;
use rtimer_update::output::OutputMode;

/// Show how the working copy containing `repo` relates to upstream
pub fn status(repo: &Path, fetch: bool, mode: OutputMode) -> anyhow::Result<()> {
    let report = inspect(&GitVersionControl::new(), repo, fetch)?;
    report.render(mode);
    Ok(())
}
