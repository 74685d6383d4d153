//! Centralized path definitions for rtimer-update
//!
//! This module provides a single source of truth for all filesystem paths the
//! updater and installer use.
//!
//! ## Layout
//!
//! ```text
//! ~/.config/rtimer-update/
//! └── config.toml                          # Updater configuration
//!
//! ~/.local/bin/rtimer                      # Installed binary
//! ~/.local/share/applications/rtimer.desktop
//! ~/.local/share/icons/hicolor/256x256/apps/rtimer.png
//! ~/.config/rtimer/                        # The application's own config
//! ```

use std::path::PathBuf;

/// Updater config directory name
const CONFIG_DIR_NAME: &str = "rtimer-update";

/// Updater config filename
const CONFIG_FILE: &str = "config.toml";

/// Icon theme subdirectory for application icons
const ICON_SUBDIR: &str = "icons/hicolor/256x256/apps";

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"))
}

fn config_root() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| home().join(".config"))
}

fn data_root() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| home().join(".local/share"))
}

/// Get the updater's config directory.
///
/// Returns `~/.config/rtimer-update/` on Linux.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    config_root().join(CONFIG_DIR_NAME)
}

/// Get the updater's config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Get the default binary install directory (`~/.local/bin`).
#[must_use]
pub fn default_bin_dir() -> PathBuf {
    home().join(".local/bin")
}

/// Get the default desktop entry directory (`~/.local/share/applications`).
#[must_use]
pub fn default_applications_dir() -> PathBuf {
    data_root().join("applications")
}

/// Get the default icon directory inside the user's hicolor theme.
#[must_use]
pub fn default_icon_dir() -> PathBuf {
    data_root().join(ICON_SUBDIR)
}

/// Get the default configuration directory of the installed application.
#[must_use]
pub fn default_app_config_dir(app_name: &str) -> PathBuf {
    config_root().join(app_name)
}
