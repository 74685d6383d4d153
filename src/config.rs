//! Updater configuration
//!
//! Read from `--config`, `$RTIMER_UPDATE_CONFIG`, or
//! `~/.config/rtimer-update/config.toml` (XDG standard). Every section is
//! optional; a missing file means "all defaults".

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::services::UpstreamDefaults;
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Where to pull from when no upstream is configured
    #[serde(default)]
    pub upstream: UpstreamConfig,
    /// How to rebuild the release artifact
    #[serde(default)]
    pub build: BuildConfig,
    /// The application being kept up to date
    #[serde(default)]
    pub app: AppConfig,
    /// Install location overrides
    #[serde(default)]
    pub install: InstallConfig,
}

/// Default remote branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Remote name
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Branch on the remote
    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
        }
    }
}

/// Build command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Program to run
    #[serde(default = "default_build_program")]
    pub program: String,
    /// Arguments passed to the program
    #[serde(default = "default_build_args")]
    pub args: Vec<String>,
}

fn default_build_program() -> String {
    "cargo".to_string()
}

fn default_build_args() -> Vec<String> {
    vec!["build".to_string(), "--release".to_string()]
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            program: default_build_program(),
            args: default_build_args(),
        }
    }
}

/// Application metadata used for installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Executable name
    pub name: String,
    /// Name shown in the desktop menu
    pub display_name: String,
    /// Menu tooltip
    pub comment: String,
    /// Built artifact, relative to the working copy root
    pub artifact: PathBuf,
    /// Icon, relative to the working copy root
    pub icon: PathBuf,
    /// Freedesktop menu categories
    pub categories: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "rtimer".to_string(),
            display_name: "rtimer".to_string(),
            comment: "A terminal Pomodoro timer".to_string(),
            artifact: PathBuf::from("target/release/rtimer"),
            icon: PathBuf::from("assets/rtimer.png"),
            categories: vec!["Utility".to_string(), "Clock".to_string()],
        }
    }
}

/// Install location overrides; unset fields use the per-user defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Directory the binary is copied to (default `~/.local/bin`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_dir: Option<PathBuf>,
    /// Directory for the `.desktop` entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applications_dir: Option<PathBuf>,
    /// Directory for the icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_dir: Option<PathBuf>,
    /// The application's own configuration directory (removed by `uninstall --purge`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_config_dir: Option<PathBuf>,
}

impl UpdaterConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let path = paths::global_config();
                if path.exists() { Self::read(&path) } else { Ok(Self::default()) }
            },
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        log::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Defaults handed to the updater session
    #[must_use]
    pub fn upstream_defaults(&self) -> UpstreamDefaults {
        UpstreamDefaults {
            remote: self.upstream.remote.clone(),
            branch: self.upstream.branch.clone(),
        }
    }

    /// Binary install directory
    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        self.install.bin_dir.clone().unwrap_or_else(paths::default_bin_dir)
    }

    /// Desktop entry directory
    #[must_use]
    pub fn applications_dir(&self) -> PathBuf {
        self.install.applications_dir.clone().unwrap_or_else(paths::default_applications_dir)
    }

    /// Icon directory
    #[must_use]
    pub fn icon_dir(&self) -> PathBuf {
        self.install.icon_dir.clone().unwrap_or_else(paths::default_icon_dir)
    }

    /// Application configuration directory
    #[must_use]
    pub fn app_config_dir(&self) -> PathBuf {
        self.install
            .app_config_dir
            .clone()
            .unwrap_or_else(|| paths::default_app_config_dir(&self.app.name))
    }
}
