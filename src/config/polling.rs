use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Longest poll interval accepted from the config file, one day.
pub const MAX_POLL_SECS: f64 = 86_400.0;

/// Cadence of the background playback poll.
///
/// Values are seconds and may be fractional. The idle interval doubles as
/// the floor applied to server-supplied retry-after hints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PollingConfig {
    /// Delay after a cycle that observed active playback.
    pub fast_poll_secs: f64,

    /// Delay after a cycle that observed a paused track.
    pub paused_poll_secs: f64,

    /// Delay after an idle cycle (nothing playing) or a failed fetch.
    pub idle_poll_secs: f64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            fast_poll_secs: 0.8,
            paused_poll_secs: 2.0,
            idle_poll_secs: 4.0,
        }
    }
}

impl PollingConfig {
    /// Interval used while a track is playing.
    pub fn fast(&self) -> Duration {
        secs_to_duration(self.fast_poll_secs)
    }

    /// Interval used while a track is paused.
    pub fn paused(&self) -> Duration {
        secs_to_duration(self.paused_poll_secs)
    }

    /// Interval used when idle or after an error.
    pub fn idle(&self) -> Duration {
        secs_to_duration(self.idle_poll_secs)
    }
}

/// Out-of-range values saturate to `0..=MAX_POLL_SECS`; NaN becomes the maximum.
fn secs_to_duration(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.clamp(0.0, MAX_POLL_SECS))
        .unwrap_or(Duration::from_secs(86_400))
}
