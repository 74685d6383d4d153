//! Desktop installation adapter
//!
//! Implements `Installer` for a per-user freedesktop install:
//!
//! - binary copied into `bin_dir` (atomically replaced, mode 0755)
//! - menu entry written to `applications_dir`
//! - icon copied into the hicolor theme
//! - `update-desktop-database` / `gtk-update-icon-cache` run when available
//!
//! Installing twice, or uninstalling something absent, is harmless.
//!
//! - [`entry`] - `.desktop` file rendering

pub mod entry;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

use crate::config::{AppConfig, UpdaterConfig};
use crate::core::models::WorkingCopy;
use crate::core::ports::Installer;

/// Per-user desktop installer
#[derive(Debug, Clone)]
pub struct DesktopInstaller {
    app: AppConfig,
    bin_dir: PathBuf,
    applications_dir: PathBuf,
    icon_dir: PathBuf,
    app_config_dir: PathBuf,
}

impl DesktopInstaller {
    /// Build an installer from configuration, filling in default locations
    #[must_use]
    pub fn from_config(config: &UpdaterConfig) -> Self {
        Self {
            app: config.app.clone(),
            bin_dir: config.bin_dir(),
            applications_dir: config.applications_dir(),
            icon_dir: config.icon_dir(),
            app_config_dir: config.app_config_dir(),
        }
    }

    /// Where the binary is installed
    #[must_use]
    pub fn binary_path(&self) -> PathBuf {
        self.bin_dir.join(&self.app.name)
    }

    /// Where the menu entry is written
    #[must_use]
    pub fn entry_path(&self) -> PathBuf {
        self.applications_dir.join(format!("{}.desktop", self.app.name))
    }

    /// Where the icon is copied
    #[must_use]
    pub fn icon_path(&self) -> PathBuf {
        let ext = self.app.icon.extension().and_then(|e| e.to_str()).unwrap_or("png");
        self.icon_dir.join(format!("{}.{ext}", self.app.name))
    }

    fn install_binary(&self, artifact: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(&self.bin_dir)
            .with_context(|| format!("failed to create {}", self.bin_dir.display()))?;

        // Stage beside the target and rename: the old binary may be running.
        let target = self.binary_path();
        let staging = self.bin_dir.join(format!(".{}.new", self.app.name));
        fs::copy(artifact, &staging)
            .with_context(|| format!("failed to copy {}", artifact.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&staging)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&staging, perms)?;
        }

        fs::rename(&staging, &target)
            .with_context(|| format!("failed to replace {}", target.display()))?;
        Ok(target)
    }

    fn install_icon(&self, wc: &WorkingCopy) -> anyhow::Result<()> {
        let source = wc.join(&self.app.icon);
        if !source.exists() {
            log::debug!("no icon at {}; skipping", source.display());
            return Ok(());
        }
        fs::create_dir_all(&self.icon_dir)?;
        fs::copy(&source, self.icon_path())
            .with_context(|| format!("failed to copy icon {}", source.display()))?;
        Ok(())
    }

    fn refresh_caches(&self) {
        refresh("update-desktop-database", &[self.applications_dir.as_os_str()]);

        // icons/hicolor/<size>/apps -> icons/hicolor
        if let Some(theme_root) = self.icon_dir.parent().and_then(Path::parent)
            && theme_root.exists()
        {
            refresh(
                "gtk-update-icon-cache",
                &[OsStr::new("-f"), OsStr::new("-t"), theme_root.as_os_str()],
            );
        }
    }
}

/// Run a cache-refresh tool if it is installed; failures are only warnings
fn refresh(tool: &str, args: &[&OsStr]) {
    let Ok(program) = which::which(tool) else {
        log::debug!("{tool} not found; skipping");
        return;
    };

    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => log::debug!("{tool} ok"),
        Ok(output) => log::warn!(
            "{tool} failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        ),
        Err(e) => log::warn!("{tool} could not be run: {e}"),
    }
}

/// Remove a file if present, recording it
fn remove_file(path: PathBuf, removed: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    if path.exists() {
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
        removed.push(path);
    }
    Ok(())
}

impl Installer for DesktopInstaller {
    fn installed_binary(&self) -> Option<PathBuf> {
        let path = self.binary_path();
        path.is_file().then_some(path)
    }

    fn app_config_dir(&self) -> PathBuf {
        self.app_config_dir.clone()
    }

    fn install(&self, wc: &WorkingCopy) -> anyhow::Result<PathBuf> {
        let artifact = wc.join(&self.app.artifact);
        if !artifact.is_file() {
            anyhow::bail!("build artifact {} not found", artifact.display());
        }

        let binary = self.install_binary(&artifact)?;
        log::info!("copied {} to {}", artifact.display(), binary.display());

        self.install_icon(wc)?;

        fs::create_dir_all(&self.applications_dir)?;
        let entry = entry::render(&self.app, &binary, &self.app.name);
        fs::write(self.entry_path(), entry)
            .with_context(|| format!("failed to write {}", self.entry_path().display()))?;

        self.refresh_caches();
        Ok(binary)
    }

    fn uninstall(&self, purge_config: bool) -> anyhow::Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        remove_file(self.binary_path(), &mut removed)?;
        remove_file(self.entry_path(), &mut removed)?;
        remove_file(self.icon_path(), &mut removed)?;

        if purge_config && self.app_config_dir.exists() {
            fs::remove_dir_all(&self.app_config_dir).with_context(|| {
                format!("failed to remove {}", self.app_config_dir.display())
            })?;
            removed.push(self.app_config_dir.clone());
        }

        self.refresh_caches();
        Ok(removed)
    }
}
