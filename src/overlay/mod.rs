//! The UI-side half of the overlay.
//!
//! [`OverlayController`] is the only owner of the progress interpolation
//! state. It consumes fetch cycles from the background worker, runs the
//! fast interpolation tick and turns hotkey events into control actions,
//! all from a single task, so no state is shared across threads.

mod display;

use std::time::Instant;

pub use display::{DisplaySink, DisplayState};
use tokio::{sync::mpsc, time::MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, trace};

use crate::{
    config::ProgressConfig,
    hotkeys::Hotkey,
    services::playback::{FetchCycle, PlaybackControls, ProgressReconciler},
};

/// Single-threaded owner of display-facing playback state.
pub struct OverlayController<D: DisplaySink> {
    reconciler: ProgressReconciler,
    display: D,
    controls: Option<PlaybackControls>,
    config: ProgressConfig,
    playing: bool,
}

impl<D: DisplaySink> OverlayController<D> {
    /// Create a controller writing to `display`.
    ///
    /// Without `controls`, hotkey events are logged and ignored.
    pub fn new(config: &ProgressConfig, display: D, controls: Option<PlaybackControls>) -> Self {
        Self {
            reconciler: ProgressReconciler::new(config),
            display,
            controls,
            config: config.clone(),
            playing: false,
        }
    }

    /// The display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The interpolation state.
    pub fn reconciler(&self) -> &ProgressReconciler {
        &self.reconciler
    }

    /// Play state as currently shown.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Apply one fetch cycle from the worker.
    pub fn handle_cycle(&mut self, cycle: FetchCycle) {
        if let Some(text) = &cycle.text_changed {
            self.display.on_text_changed(text);
        }

        if cycle.keep_previous {
            debug!("Keeping previous snapshot while rate limited");
            return;
        }

        let snapshot = &cycle.snapshot;
        if snapshot.is_playing != self.playing {
            self.playing = snapshot.is_playing;
            self.display.on_playing_changed(self.playing);
        }

        if let Some(progress) = self.reconciler.apply_snapshot(snapshot) {
            self.display.on_progress_changed(progress);
        }
    }

    /// Run one interpolation step.
    pub fn handle_tick(&mut self, now: Instant) {
        if let Some(progress) = self.reconciler.tick(now) {
            trace!(progress, "Interpolated progress");
            self.display.on_progress_changed(progress);
        }
    }

    /// React to a hotkey by firing the matching control action.
    pub fn handle_hotkey(&self, hotkey: Hotkey) {
        match &self.controls {
            Some(controls) => {
                debug!(%hotkey, playing = self.playing, "Dispatching control action");
                // fire-and-forget; the next poll reflects the outcome
                drop(controls.dispatch(hotkey, self.playing));
            }
            None => debug!(%hotkey, "No playback controls attached"),
        }
    }

    /// Drive the controller until cancelled or the worker goes away.
    ///
    /// Returns the display sink so callers can inspect the final state.
    #[instrument(name = "overlay", skip_all)]
    pub async fn run(
        mut self,
        mut cycles: mpsc::UnboundedReceiver<FetchCycle>,
        mut hotkeys: mpsc::UnboundedReceiver<Hotkey>,
        cancel: CancellationToken,
    ) -> D {
        let mut ticker = tokio::time::interval(self.config.tick_interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut hotkeys_open = true;

        info!("Overlay controller started");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                cycle = cycles.recv() => match cycle {
                    Some(cycle) => self.handle_cycle(cycle),
                    None => break,
                },
                hotkey = hotkeys.recv(), if hotkeys_open => match hotkey {
                    Some(hotkey) => self.handle_hotkey(hotkey),
                    None => hotkeys_open = false,
                },
                now = ticker.tick() => self.handle_tick(now.into_std()),
            }
        }
        info!("Overlay controller stopped");

        self.display
    }
}
