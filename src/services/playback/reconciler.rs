//! Local progress interpolation between authoritative fetches.
//!
//! Two values move on the permille scale: `real`, the last fetched position,
//! and `local`, what the display shows. Fetches arrive every second or so;
//! ticks arrive every few tens of milliseconds and advance `local` by the
//! wall time elapsed, scaled by the track length.
//!
//! `local` is hard-reset to `real` when they drift apart by more than the
//! drift threshold, when the play state flips, or when the track changes.
//! Smaller drift is left alone while playing so the bar does not stutter
//! backwards. While paused nothing interpolates, so any difference resyncs.

use std::time::Instant;

use super::{PERMILLE_MAX, PlaybackSnapshot, TrackKey};
use crate::config::ProgressConfig;

/// Interpolation state plus the thresholds that govern it.
#[derive(Debug, Clone)]
pub struct ProgressReconciler {
    drift_threshold: f64,
    display_threshold: f64,
    local: f64,
    real: u16,
    track_duration_ms: u64,
    playing: bool,
    track_key: Option<TrackKey>,
    last_tick: Option<Instant>,
}

impl ProgressReconciler {
    /// Create a reconciler at zero progress, not playing.
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            drift_threshold: f64::from(config.drift_threshold_permille),
            display_threshold: f64::from(config.display_threshold_permille),
            local: 0.0,
            real: 0,
            track_duration_ms: 1,
            playing: false,
            track_key: None,
            last_tick: None,
        }
    }

    /// Interpolated value as shown on the display.
    pub fn local_permille(&self) -> u16 {
        // local is kept within 0..=1000
        self.local.floor() as u16
    }

    /// Last authoritative value.
    pub fn real_permille(&self) -> u16 {
        self.real
    }

    /// Whether the last update reported playback as running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Length of the current track in milliseconds.
    pub fn track_duration_ms(&self) -> u64 {
        self.track_duration_ms
    }

    /// Apply a fetched snapshot.
    ///
    /// Returns the value to push to the display when a hard reset happened,
    /// `None` when `local` keeps interpolating on its own.
    pub fn apply_snapshot(&mut self, snapshot: &PlaybackSnapshot) -> Option<u16> {
        self.apply(
            snapshot.progress_permille(),
            snapshot.is_playing,
            snapshot.duration_ms,
            snapshot.track_key.as_ref(),
        )
    }

    /// Apply an authoritative update.
    ///
    /// See [`apply_snapshot`](Self::apply_snapshot).
    pub fn apply(
        &mut self,
        real: u16,
        playing: bool,
        duration_ms: u64,
        track_key: Option<&TrackKey>,
    ) -> Option<u16> {
        let real = real.min(PERMILLE_MAX);
        let play_state_changed = playing != self.playing;
        let track_changed = track_key != self.track_key.as_ref();

        self.real = real;
        self.track_duration_ms = duration_ms.max(1);
        self.playing = playing;
        if track_changed {
            self.track_key = track_key.cloned();
        }
        if play_state_changed {
            // Time spent paused must not count towards the next tick.
            self.last_tick = None;
        }

        let drifted = (self.local - f64::from(real)).abs() > self.drift_threshold;
        let stale_while_paused = !playing && self.local != f64::from(real);
        if drifted || stale_while_paused || play_state_changed || track_changed {
            self.local = f64::from(real);
            return Some(real);
        }

        None
    }

    /// Advance `local` by the wall time since the previous tick.
    ///
    /// Returns the value to push to the display, or `None` when not playing,
    /// on the first tick after a gap, or when `local` has wandered outside
    /// the display envelope around `real`.
    pub fn tick(&mut self, now: Instant) -> Option<u16> {
        if !self.playing {
            return None;
        }

        let previous = self.last_tick.replace(now)?;

        let elapsed_ms = now.saturating_duration_since(previous).as_micros() as f64 / 1000.0;
        let increment = elapsed_ms * f64::from(PERMILLE_MAX) / self.track_duration_ms as f64;
        self.local = (self.local + increment).min(f64::from(PERMILLE_MAX));

        if (self.local - f64::from(self.real)).abs() < self.display_threshold {
            Some(self.local_permille())
        } else {
            None
        }
    }
}
