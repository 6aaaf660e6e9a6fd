//! Configuration schema definitions and validation.
//!
//! One TOML file drives every tunable of the overlay: poll cadence,
//! interpolation thresholds, widget geometry and the provider endpoint.
//! Each section is optional; missing keys fall back to their defaults.

mod controls;
mod general;
mod loading;
mod paths;
mod polling;
mod progress;
mod provider;
mod window;

#[cfg(test)]
mod tests;

pub use controls::ControlsConfig;
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use polling::{MAX_POLL_SECS, PollingConfig};
pub use progress::ProgressConfig;
pub use provider::ProviderConfig;
pub use window::WindowConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Background poll cadence.
    #[serde(default)]
    pub polling: PollingConfig,

    /// Progress interpolation thresholds.
    #[serde(default)]
    pub progress: ProgressConfig,

    /// Widget geometry and placement.
    #[serde(default)]
    pub window: WindowConfig,

    /// Playback control behaviour.
    #[serde(default)]
    pub controls: ControlsConfig,

    /// Playback Web API connection.
    #[serde(default)]
    pub provider: ProviderConfig,
}
