use std::fmt;

/// Text shown when the provider reports no active item.
pub const NOTHING_PLAYING_TEXT: &str = "Nothing playing";

/// Text shown while the provider cannot be reached.
pub const DISCONNECTED_TEXT: &str = "(disconnected)";

/// Separator between the track name and its artists.
pub const TRACK_SEPARATOR: &str = " — ";

/// Upper bound of the permille scale.
pub const PERMILLE_MAX: u16 = 1000;

/// Opaque identifier of the current track.
///
/// Built from the provider's item id when there is one, otherwise from the
/// composed display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackKey(String);

impl TrackKey {
    /// Wrap a provider identifier or display string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a failed fetch, kept for the poll scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// Network or API hiccup with no backoff hint.
    Transient,

    /// The provider asked us to back off.
    RateLimited {
        /// Seconds the provider asked us to wait.
        retry_after_secs: u64,
    },
}

/// Coarse playback state derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// A track is playing.
    Playing,

    /// A track is loaded but paused.
    Paused,

    /// Nothing is loaded.
    Idle,
}

/// One normalized read of the current playback state.
///
/// `duration_ms` is never zero. `position_ms` may exceed it when the
/// provider lags behind a track change; [`PlaybackSnapshot::progress_permille`]
/// clamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSnapshot {
    /// Current track, `None` when nothing is playing or the fetch failed.
    pub track_key: Option<TrackKey>,

    /// Display text: `"{name} — {artists}"` or a fallback indicator.
    pub text: String,

    /// Whether playback is running.
    pub is_playing: bool,

    /// Playback offset in milliseconds.
    pub position_ms: u64,

    /// Track length in milliseconds, at least 1.
    pub duration_ms: u64,

    /// Shareable link to the current track, if known.
    pub track_url: Option<String>,

    /// Set when this snapshot stands in for a failed fetch.
    pub fetch_error: Option<FetchError>,
}

impl PlaybackSnapshot {
    /// Snapshot for a provider that reports no active item.
    pub fn nothing_playing() -> Self {
        Self {
            track_key: None,
            text: NOTHING_PLAYING_TEXT.to_string(),
            is_playing: false,
            position_ms: 0,
            duration_ms: 1,
            track_url: None,
            fetch_error: None,
        }
    }

    /// Snapshot emitted for a failed fetch: not playing, zero progress.
    pub fn failed(error: FetchError) -> Self {
        Self {
            text: DISCONNECTED_TEXT.to_string(),
            fetch_error: Some(error),
            ..Self::nothing_playing()
        }
    }

    /// Progress on the permille scale, clamped to `0..=1000`.
    pub fn progress_permille(&self) -> u16 {
        permille(self.position_ms, self.duration_ms)
    }

    /// Coarse state used by the scheduler.
    pub fn state(&self) -> PlaybackState {
        match (&self.track_key, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }
}

/// `round(1000 * min(position, duration) / duration)` with a zero duration
/// treated as 1.
pub fn permille(position_ms: u64, duration_ms: u64) -> u16 {
    let duration = u128::from(duration_ms.max(1));
    let position = u128::from(position_ms).min(duration);
    let scaled = (position * u128::from(PERMILLE_MAX) + duration / 2) / duration;

    u16::try_from(scaled).unwrap_or(PERMILLE_MAX)
}

/// Raw playback state as reported by a provider, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentPlayback {
    /// Whether the provider reports playback as running.
    pub is_playing: bool,

    /// Offset into the current item.
    pub progress_ms: Option<u64>,

    /// The loaded item, absent between tracks or during ads.
    pub item: Option<PlaybackItem>,

    /// Volume of the active device, when it exposes one.
    pub device_volume: Option<u8>,
}

/// Track or episode metadata from the provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackItem {
    /// Provider-side identifier.
    pub id: Option<String>,

    /// Track title.
    pub name: String,

    /// Artist (or show) names in credit order.
    pub artists: Vec<String>,

    /// Length reported by the provider; may be missing or zero.
    pub duration_ms: Option<u64>,

    /// Public link to the item.
    pub url: Option<String>,
}

impl PlaybackItem {
    /// `"{name} — {artist, artist}"`.
    pub fn display_text(&self) -> String {
        format!("{}{}{}", self.name, TRACK_SEPARATOR, self.artists.join(", "))
    }

    /// Public link, falling back to a URL built from the id.
    pub fn share_url(&self) -> Option<String> {
        self.url.clone().or_else(|| {
            self.id
                .as_ref()
                .map(|id| format!("https://open.spotify.com/track/{id}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permille_rounds_and_clamps() {
        assert_eq!(permille(30_000, 120_000), 250);
        assert_eq!(permille(0, 120_000), 0);
        assert_eq!(permille(1, 3), 333);
        assert_eq!(permille(2, 3), 667);
        assert_eq!(permille(500_000, 120_000), 1000);
        assert_eq!(permille(10, 0), 1000);
    }

    #[test]
    fn permille_stays_in_range_for_extreme_values() {
        for (position, duration) in [(u64::MAX, 1), (u64::MAX, u64::MAX), (0, u64::MAX), (7, 1)] {
            assert!(permille(position, duration) <= PERMILLE_MAX);
        }
    }

    #[test]
    fn failed_snapshot_is_not_playing_and_zeroed() {
        let snapshot = PlaybackSnapshot::failed(FetchError::Transient);

        assert!(!snapshot.is_playing);
        assert_eq!(snapshot.progress_permille(), 0);
        assert_eq!(snapshot.text, DISCONNECTED_TEXT);
        assert_eq!(snapshot.state(), PlaybackState::Idle);
    }

    #[test]
    fn item_text_joins_artists() {
        let item = PlaybackItem {
            name: "Song".into(),
            artists: vec!["A".into(), "B".into()],
            ..PlaybackItem::default()
        };

        assert_eq!(item.display_text(), "Song — A, B");
    }

    #[test]
    fn share_url_falls_back_to_id() {
        let item = PlaybackItem {
            id: Some("4uLU6hMCjMI75M1A2tKUQC".into()),
            ..PlaybackItem::default()
        };

        assert_eq!(
            item.share_url().as_deref(),
            Some("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC")
        );
    }
}
