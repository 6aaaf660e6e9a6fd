//! Unit tests for config module
//!
//! Tests configuration types, defaults, validation and serialization.

#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::{
    OverlayError,
    config::{Config, LogLevel, PollingConfig},
};

#[test]
fn config_defaults_match_overlay_constants() {
    let config = Config::default();

    assert_eq!(config.polling.fast_poll_secs, 0.8);
    assert_eq!(config.polling.paused_poll_secs, 2.0);
    assert_eq!(config.polling.idle_poll_secs, 4.0);
    assert_eq!(config.progress.drift_threshold_permille, 30);
    assert_eq!(config.progress.display_threshold_permille, 50);
    assert_eq!(config.window.snap_px, 12);
    assert_eq!(config.window.margin_px, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[polling]"));
    assert!(toml_str.contains("[window]"));
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_section_keeps_other_defaults() {
    let config = Config::from_toml_str(
        r#"
        [general]
        log_level = "debug"

        [polling]
        fast_poll_secs = 0.5
    "#,
    )
    .unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.polling.fast_poll_secs, 0.5);
    assert_eq!(config.polling.idle_poll_secs, 4.0);
}

#[test]
fn rejects_non_positive_poll_interval() {
    let err = Config::from_toml_str("[polling]\nidle_poll_secs = 0.0\n").unwrap_err();

    match err {
        OverlayError::InvalidConfigField { field, .. } => assert_eq!(field, "idle_poll_secs"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_poll_interval_too_large_for_a_duration() {
    let err = Config::from_toml_str("[polling]\nfast_poll_secs = 1e20\n").unwrap_err();

    match err {
        OverlayError::InvalidConfigField { field, .. } => assert_eq!(field, "fast_poll_secs"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn accepts_poll_interval_of_one_day() {
    let config = Config::from_toml_str("[polling]\nidle_poll_secs = 86400.0\n").unwrap();

    assert_eq!(config.polling.idle(), std::time::Duration::from_secs(86_400));
}

#[test]
fn unvalidated_poll_intervals_saturate() {
    let polling = PollingConfig {
        fast_poll_secs: 1e20,
        paused_poll_secs: -3.0,
        idle_poll_secs: f64::NAN,
    };

    assert_eq!(polling.fast(), std::time::Duration::from_secs(86_400));
    assert_eq!(polling.paused(), std::time::Duration::ZERO);
    assert_eq!(polling.idle(), std::time::Duration::from_secs(86_400));
}

#[test]
fn rejects_display_threshold_below_drift() {
    let err = Config::from_toml_str(
        "[progress]\ndrift_threshold_permille = 60\ndisplay_threshold_permille = 50\n",
    )
    .unwrap_err();

    assert!(err.to_string().contains("display_threshold_permille"));
}

#[test]
fn rejects_malformed_toml() {
    let err = Config::from_toml_str("[window\nwidth = 3").unwrap_err();
    assert!(matches!(err, OverlayError::TomlParseError { .. }));
}

#[test]
fn load_from_creates_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");

    let config = Config::load_from(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config, Config::default());
    assert!(fs::read_to_string(&path).unwrap().starts_with('#'));
}

#[test]
fn load_from_reads_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[window]\nwidth = 420\nremember_position = false\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.window.width, 420);
    assert!(!config.window.remember_position);
    assert_eq!(config.window.height, 34);
}

#[test]
fn io_errors_without_path_convert() {
    fn resolve() -> crate::Result<()> {
        Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "HOME not set"))?;
        Ok(())
    }

    assert!(matches!(resolve(), Err(OverlayError::Io(_))));
}
