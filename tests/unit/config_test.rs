//! Tests for configuration loading

use std::path::PathBuf;

use rtimer_update::config::UpdaterConfig;
use tempfile::TempDir;

#[test]
fn test_empty_config_is_default() {
    let config = UpdaterConfig::parse("").unwrap();
    assert_eq!(config, UpdaterConfig::default());
    assert_eq!(config.upstream.remote, "origin");
    assert_eq!(config.upstream.branch, "main");
    assert_eq!(config.build.program, "cargo");
    assert_eq!(config.build.args, vec!["build", "--release"]);
    assert_eq!(config.app.artifact, PathBuf::from("target/release/rtimer"));
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = UpdaterConfig::parse(
        r#"
[upstream]
branch = "stable"

[app]
name = "rtimer-dev"
"#,
    )
    .unwrap();

    assert_eq!(config.upstream.remote, "origin");
    assert_eq!(config.upstream.branch, "stable");
    assert_eq!(config.app.name, "rtimer-dev");
    assert_eq!(config.app.comment, "A terminal Pomodoro timer");

    let defaults = config.upstream_defaults();
    assert_eq!(defaults.branch, "stable");
}

#[test]
fn test_install_overrides() {
    let config = UpdaterConfig::parse(
        r#"
[install]
bin_dir = "/opt/rtimer/bin"
"#,
    )
    .unwrap();

    assert_eq!(config.bin_dir(), PathBuf::from("/opt/rtimer/bin"));
    assert!(config.applications_dir().ends_with("applications"));
}

#[test]
fn test_app_config_dir_follows_app_name() {
    let config = UpdaterConfig::parse("[app]\nname = \"pomo\"\n").unwrap();
    assert!(config.app_config_dir().ends_with("pomo"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(UpdaterConfig::parse("[upstream\nremote = ").is_err());
    assert!(UpdaterConfig::parse("[build]\nargs = \"not-a-list\"\n").is_err());
}

#[test]
fn test_load_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[build]\nprogram = \"make\"\nargs = [\"release\"]\n").unwrap();

    let config = UpdaterConfig::load(Some(&path)).unwrap();

    assert_eq!(config.build.program, "make");
    assert_eq!(config.build.args, vec!["release"]);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let temp = TempDir::new().unwrap();
    let err = UpdaterConfig::load(Some(&temp.path().join("absent.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config"));
}
