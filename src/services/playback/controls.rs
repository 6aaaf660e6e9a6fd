use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::{PlaybackError, PlaybackProvider};
use crate::{config::ControlsConfig, hotkeys::Hotkey};

/// Playback control actions triggered from buttons or hotkeys.
///
/// Actions are fire-and-forget: [`dispatch`](PlaybackControls::dispatch)
/// spawns the provider call and returns immediately. Nothing waits for, or
/// cancels, an in-flight poll.
#[derive(Clone)]
pub struct PlaybackControls {
    provider: Arc<dyn PlaybackProvider>,
    volume_step: u8,
    default_volume: u8,
}

impl PlaybackControls {
    /// Create controls for the given provider.
    pub fn new(provider: Arc<dyn PlaybackProvider>, config: &ControlsConfig) -> Self {
        Self {
            provider,
            volume_step: config.volume_step,
            default_volume: config.default_volume.min(100),
        }
    }

    /// Run the action for `hotkey` in the background.
    ///
    /// `playing` is the play state currently shown, used to decide which
    /// way the toggle goes. Failures are logged and dropped.
    pub fn dispatch(&self, hotkey: Hotkey, playing: bool) -> tokio::task::JoinHandle<()> {
        let controls = self.clone();
        tokio::spawn(async move {
            if let Err(e) = controls.perform(hotkey, playing).await {
                warn!("Control action '{hotkey}' failed: {e}");
            }
        })
    }

    /// Run the action for `hotkey` and wait for the provider's answer.
    ///
    /// # Errors
    /// Returns whatever the provider returned for the underlying call.
    #[instrument(skip(self))]
    pub async fn perform(&self, hotkey: Hotkey, playing: bool) -> Result<(), PlaybackError> {
        match hotkey {
            Hotkey::Toggle if playing => self.provider.pause_playback().await,
            Hotkey::Toggle => self.provider.start_playback().await,
            Hotkey::Previous => self.provider.previous_track().await,
            Hotkey::Next => self.provider.next_track().await,
            Hotkey::VolumeUp => self.adjust_volume(i16::from(self.volume_step)).await,
            Hotkey::VolumeDown => self.adjust_volume(-i16::from(self.volume_step)).await,
        }
    }

    async fn adjust_volume(&self, delta: i16) -> Result<(), PlaybackError> {
        let Some(playback) = self.provider.current_playback().await? else {
            debug!("No active session, ignoring volume change");
            return Ok(());
        };

        let current = playback.device_volume.unwrap_or(self.default_volume);
        let target = (i16::from(current) + delta).clamp(0, 100);
        let target = u8::try_from(target).unwrap_or(current);

        if target == current {
            return Ok(());
        }

        debug!(current, target, "Adjusting volume");
        self.provider.set_volume(target).await
    }
}
