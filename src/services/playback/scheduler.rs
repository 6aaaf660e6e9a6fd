use std::time::Duration;

use super::{FetchError, PlaybackSnapshot, PlaybackState};
use crate::config::PollingConfig;

/// Chooses the delay before the next fetch from the previous cycle's outcome.
///
/// Pure policy: playing polls fast, paused polls at a medium pace, idle and
/// failed cycles poll slowly. A rate-limit hint is honoured but never
/// shortens the delay below the idle interval.
#[derive(Debug, Clone, PartialEq)]
pub struct PollScheduler {
    fast: Duration,
    paused: Duration,
    idle: Duration,
}

impl PollScheduler {
    /// Build the policy from the polling section of the config.
    pub fn new(config: &PollingConfig) -> Self {
        Self {
            fast: config.fast(),
            paused: config.paused(),
            idle: config.idle(),
        }
    }

    /// Delay before the next fetch, given the snapshot just produced.
    pub fn next_delay(&self, previous: &PlaybackSnapshot) -> Duration {
        match previous.fetch_error {
            Some(error) => self.delay_after_error(error),
            None => match previous.state() {
                PlaybackState::Playing => self.fast,
                PlaybackState::Paused => self.paused,
                PlaybackState::Idle => self.idle,
            },
        }
    }

    fn delay_after_error(&self, error: FetchError) -> Duration {
        match error {
            FetchError::RateLimited { retry_after_secs } => {
                Duration::from_secs(retry_after_secs).max(self.idle)
            }
            FetchError::Transient => self.idle,
        }
    }
}
