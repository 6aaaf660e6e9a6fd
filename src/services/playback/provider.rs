use async_trait::async_trait;

use super::{CurrentPlayback, PlaybackError};

/// A source of playback state that also accepts control commands.
///
/// The overlay polls [`current_playback`](PlaybackProvider::current_playback)
/// from a background task and fires control commands from the UI side
/// without waiting on the poll.
#[async_trait]
pub trait PlaybackProvider: Send + Sync {
    /// Read the current playback state. `Ok(None)` means no active session.
    ///
    /// # Errors
    /// Returns `PlaybackError::RateLimited` when the provider asks for backoff,
    /// any other variant for transient failures.
    async fn current_playback(&self) -> Result<Option<CurrentPlayback>, PlaybackError>;

    /// Skip to the previous track.
    ///
    /// # Errors
    /// Returns an error if the provider rejects the command.
    async fn previous_track(&self) -> Result<(), PlaybackError>;

    /// Skip to the next track.
    ///
    /// # Errors
    /// Returns an error if the provider rejects the command.
    async fn next_track(&self) -> Result<(), PlaybackError>;

    /// Pause playback.
    ///
    /// # Errors
    /// Returns an error if the provider rejects the command.
    async fn pause_playback(&self) -> Result<(), PlaybackError>;

    /// Start or resume playback.
    ///
    /// # Errors
    /// Returns an error if the provider rejects the command.
    async fn start_playback(&self) -> Result<(), PlaybackError>;

    /// Set the active device volume, `0..=100`.
    ///
    /// # Errors
    /// Returns an error if the provider rejects the command.
    async fn set_volume(&self, percent: u8) -> Result<(), PlaybackError>;
}
