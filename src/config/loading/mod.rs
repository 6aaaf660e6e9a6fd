mod file_creation;

use std::{fs, path::Path};

use file_creation::create_default_config_file;
use tracing::{debug, instrument};

use super::{Config, ConfigPaths, MAX_POLL_SECS};
use crate::{OverlayError, Result};

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or
    /// the file at that location is unreadable or invalid.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads and validates a configuration file.
    ///
    /// A missing file is created with a commented header so the user has
    /// something to edit; its content parses to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or read
    /// - The TOML content is invalid
    /// - A value fails validation
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("Config file missing, writing default");
            create_default_config_file(path)?;
        }

        let content = fs::read_to_string(path).map_err(|e| OverlayError::io_at(e, path))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| OverlayError::toml_parse(e, Some(path)))?;

        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from a TOML string and validates it.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or a value fails validation.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| OverlayError::toml_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints serde cannot express.
    ///
    /// # Errors
    /// Returns `OverlayError::InvalidConfigField` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let polling = &self.polling;
        for (field, value) in [
            ("fast_poll_secs", polling.fast_poll_secs),
            ("paused_poll_secs", polling.paused_poll_secs),
            ("idle_poll_secs", polling.idle_poll_secs),
        ] {
            if !value.is_finite() || value <= 0.0 || value > MAX_POLL_SECS {
                return Err(OverlayError::invalid_field(
                    "polling",
                    field,
                    format!("must be within (0, {MAX_POLL_SECS}] seconds, got {value}"),
                ));
            }
        }

        let progress = &self.progress;
        if progress.tick_interval_ms == 0 {
            return Err(OverlayError::invalid_field(
                "progress",
                "tick_interval_ms",
                "must be greater than zero",
            ));
        }
        if progress.drift_threshold_permille > 1000 {
            return Err(OverlayError::invalid_field(
                "progress",
                "drift_threshold_permille",
                "must be within 0..=1000",
            ));
        }
        if progress.display_threshold_permille < progress.drift_threshold_permille {
            return Err(OverlayError::invalid_field(
                "progress",
                "display_threshold_permille",
                format!(
                    "must not be smaller than drift_threshold_permille ({})",
                    progress.drift_threshold_permille
                ),
            ));
        }

        let window = &self.window;
        if window.width <= 0 || window.height <= 0 {
            return Err(OverlayError::invalid_field(
                "window",
                "width/height",
                "widget size must be positive",
            ));
        }
        if window.snap_px < 0 || window.margin_px < 0 {
            return Err(OverlayError::invalid_field(
                "window",
                "snap_px/margin_px",
                "must not be negative",
            ));
        }

        if self.controls.default_volume > 100 {
            return Err(OverlayError::invalid_field(
                "controls",
                "default_volume",
                "must be within 0..=100",
            ));
        }

        Ok(())
    }
}
