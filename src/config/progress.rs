use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Thresholds for local progress interpolation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    /// Divergence (in permille) between the interpolated and fetched
    /// position above which the interpolated value is hard-reset.
    pub drift_threshold_permille: u16,

    /// Interpolated values are only pushed to the display while they stay
    /// strictly closer than this (in permille) to the last fetched position.
    pub display_threshold_permille: u16,

    /// Period of the interpolation tick in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            drift_threshold_permille: 30,
            display_threshold_permille: 50,
            tick_interval_ms: 60,
        }
    }
}

impl ProgressConfig {
    /// Period of the interpolation tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
