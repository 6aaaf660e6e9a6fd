use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Playback control behaviour for buttons and hotkeys.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    /// Percentage points added or removed per volume hotkey press.
    pub volume_step: u8,

    /// Volume assumed when the active device does not report one.
    pub default_volume: u8,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            volume_step: 5,
            default_volume: 50,
        }
    }
}
