use crate::services::common::Property;

/// Receiver of display updates from the overlay controller.
///
/// All calls happen on the controller's task, in the order the updates
/// were produced.
pub trait DisplaySink {
    /// The track text changed.
    fn on_text_changed(&mut self, text: &str);

    /// The progress bar moved, `0..=1000`.
    fn on_progress_changed(&mut self, permille: u16);

    /// Playback started or stopped.
    fn on_playing_changed(&mut self, playing: bool);
}

/// Watchable display state for a UI shell.
///
/// Clones share the same underlying values, so a shell can keep one clone
/// and subscribe while the controller writes through another.
#[derive(Debug, Clone)]
pub struct DisplayState {
    /// Marquee text.
    pub text: Property<String>,
    /// Progress bar value in permille.
    pub progress: Property<u16>,
    /// Play/pause icon state.
    pub playing: Property<bool>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            text: Property::new("…".to_string()),
            progress: Property::new(0),
            playing: Property::new(false),
        }
    }
}

impl DisplaySink for DisplayState {
    fn on_text_changed(&mut self, text: &str) {
        self.text.set(text.to_string());
    }

    fn on_progress_changed(&mut self, permille: u16) {
        self.progress.set(permille);
    }

    fn on_playing_changed(&mut self, playing: bool) {
        self.playing.set(playing);
    }
}
