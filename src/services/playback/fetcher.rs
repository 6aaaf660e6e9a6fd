use std::sync::Arc;

use tracing::{debug, warn};

use super::{
    CurrentPlayback, DISCONNECTED_TEXT, FetchError, PlaybackProvider, PlaybackSnapshot, TrackKey,
};

/// Result of one fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchCycle {
    /// Normalized snapshot, possibly standing in for a failure.
    pub snapshot: PlaybackSnapshot,

    /// New display text, present only when it differs from the last emitted text.
    pub text_changed: Option<String>,

    /// Set for a rate-limited cycle while an earlier good snapshot is still
    /// on screen; the display should keep showing it.
    pub keep_previous: bool,
}

/// Performs one provider query per call and normalizes the result.
///
/// Text emission is edge-triggered: the same text is never reported twice
/// in a row, so a display does not reset its marquee on every poll.
pub struct SnapshotFetcher {
    provider: Arc<dyn PlaybackProvider>,
    last_text: Option<String>,
    has_displayable: bool,
}

impl SnapshotFetcher {
    /// Create a fetcher for the given provider.
    pub fn new(provider: Arc<dyn PlaybackProvider>) -> Self {
        Self {
            provider,
            last_text: None,
            has_displayable: false,
        }
    }

    /// Query the provider once.
    ///
    /// Never fails: provider errors become a snapshot with `fetch_error` set,
    /// `is_playing = false` and zero progress. A rate-limited cycle leaves
    /// the previously emitted text alone when a good snapshot was already shown.
    pub async fn fetch(&mut self) -> FetchCycle {
        match self.provider.current_playback().await {
            Ok(raw) => {
                let snapshot = normalize(raw);
                self.has_displayable = true;
                let text_changed = self.emit_text(&snapshot.text);
                FetchCycle {
                    snapshot,
                    text_changed,
                    keep_previous: false,
                }
            }
            Err(e) => {
                let classification = e.classify();
                let snapshot = PlaybackSnapshot::failed(classification);

                let keep_previous = matches!(classification, FetchError::RateLimited { .. })
                    && self.has_displayable;
                let text_changed = if keep_previous {
                    debug!("Rate limited, keeping previous snapshot on screen: {e}");
                    None
                } else {
                    warn!("Playback fetch failed: {e}");
                    self.has_displayable = false;
                    self.emit_text(DISCONNECTED_TEXT)
                };

                FetchCycle {
                    snapshot,
                    text_changed,
                    keep_previous,
                }
            }
        }
    }

    fn emit_text(&mut self, text: &str) -> Option<String> {
        if self.last_text.as_deref() == Some(text) {
            return None;
        }

        self.last_text = Some(text.to_string());
        Some(text.to_string())
    }
}

/// Turn a raw provider answer into a snapshot.
///
/// No active item means nothing is playing, whatever the provider's
/// `is_playing` flag says. A missing or zero duration becomes 1.
pub fn normalize(raw: Option<CurrentPlayback>) -> PlaybackSnapshot {
    let Some(playback) = raw else {
        return PlaybackSnapshot::nothing_playing();
    };
    let Some(item) = playback.item else {
        return PlaybackSnapshot::nothing_playing();
    };

    let text = item.display_text();
    let track_key = TrackKey::new(item.id.clone().unwrap_or_else(|| text.clone()));

    PlaybackSnapshot {
        track_key: Some(track_key),
        track_url: item.share_url(),
        text,
        is_playing: playback.is_playing,
        position_ms: playback.progress_ms.unwrap_or(0),
        duration_ms: item.duration_ms.unwrap_or(1).max(1),
        fetch_error: None,
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::services::playback::{NOTHING_PLAYING_TEXT, PlaybackError, PlaybackItem};

    struct ScriptedProvider {
        answers: Mutex<VecDeque<Result<Option<CurrentPlayback>, PlaybackError>>>,
    }

    impl ScriptedProvider {
        fn new(answers: Vec<Result<Option<CurrentPlayback>, PlaybackError>>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers.into()),
            })
        }
    }

    #[async_trait]
    impl PlaybackProvider for ScriptedProvider {
        async fn current_playback(&self) -> Result<Option<CurrentPlayback>, PlaybackError> {
            self.answers.lock().unwrap().pop_front().unwrap_or(Ok(None))
        }
        async fn previous_track(&self) -> Result<(), PlaybackError> {
            Ok(())
        }
        async fn next_track(&self) -> Result<(), PlaybackError> {
            Ok(())
        }
        async fn pause_playback(&self) -> Result<(), PlaybackError> {
            Ok(())
        }
        async fn start_playback(&self) -> Result<(), PlaybackError> {
            Ok(())
        }
        async fn set_volume(&self, _percent: u8) -> Result<(), PlaybackError> {
            Ok(())
        }
    }

    fn track_a() -> CurrentPlayback {
        CurrentPlayback {
            is_playing: true,
            progress_ms: Some(30_000),
            item: Some(PlaybackItem {
                id: Some("A".into()),
                name: "Song".into(),
                artists: vec!["Artist".into()],
                duration_ms: Some(120_000),
                url: None,
            }),
            device_volume: Some(40),
        }
    }

    #[tokio::test]
    async fn identical_fetches_emit_text_once() {
        let provider = ScriptedProvider::new(vec![Ok(Some(track_a())), Ok(Some(track_a()))]);
        let mut fetcher = SnapshotFetcher::new(provider);

        let first = fetcher.fetch().await;
        assert_eq!(first.snapshot.track_key, Some(TrackKey::new("A")));
        assert_eq!(first.snapshot.progress_permille(), 250);
        assert_eq!(first.text_changed.as_deref(), Some("Song — Artist"));

        let second = fetcher.fetch().await;
        assert_eq!(second.snapshot.progress_permille(), 250);
        assert_eq!(second.text_changed, None);
    }

    #[tokio::test]
    async fn transient_failure_emits_disconnected_once() {
        let provider = ScriptedProvider::new(vec![
            Err(PlaybackError::Unreachable("down".into())),
            Err(PlaybackError::Unreachable("down".into())),
        ]);
        let mut fetcher = SnapshotFetcher::new(provider);

        let first = fetcher.fetch().await;
        assert_eq!(first.snapshot.fetch_error, Some(FetchError::Transient));
        assert!(!first.snapshot.is_playing);
        assert_eq!(first.text_changed.as_deref(), Some(DISCONNECTED_TEXT));

        assert_eq!(fetcher.fetch().await.text_changed, None);
    }

    #[tokio::test]
    async fn rate_limit_after_success_keeps_text() {
        let provider = ScriptedProvider::new(vec![
            Ok(Some(track_a())),
            Err(PlaybackError::RateLimited {
                retry_after_secs: 10,
            }),
        ]);
        let mut fetcher = SnapshotFetcher::new(provider);
        fetcher.fetch().await;

        let limited = fetcher.fetch().await;

        assert_eq!(
            limited.snapshot.fetch_error,
            Some(FetchError::RateLimited {
                retry_after_secs: 10
            })
        );
        assert!(!limited.snapshot.is_playing);
        assert_eq!(limited.text_changed, None);
        assert!(limited.keep_previous);
    }

    #[tokio::test]
    async fn rate_limit_without_prior_snapshot_shows_disconnected() {
        let provider = ScriptedProvider::new(vec![Err(PlaybackError::RateLimited {
            retry_after_secs: 3,
        })]);
        let mut fetcher = SnapshotFetcher::new(provider);

        let cycle = fetcher.fetch().await;

        assert_eq!(cycle.text_changed.as_deref(), Some(DISCONNECTED_TEXT));
        assert!(!cycle.keep_previous);
    }

    #[test]
    fn normalize_without_item_is_nothing_playing() {
        let snapshot = normalize(Some(CurrentPlayback {
            is_playing: true,
            ..CurrentPlayback::default()
        }));

        assert_eq!(snapshot.track_key, None);
        assert!(!snapshot.is_playing);
        assert_eq!(snapshot.text, NOTHING_PLAYING_TEXT);
    }

    #[test]
    fn normalize_defaults_missing_fields() {
        let mut raw = track_a();
        raw.progress_ms = None;
        if let Some(item) = raw.item.as_mut() {
            item.duration_ms = Some(0);
            item.id = None;
        }

        let snapshot = normalize(Some(raw));

        assert_eq!(snapshot.duration_ms, 1);
        assert_eq!(snapshot.position_ms, 0);
        assert_eq!(snapshot.track_key, Some(TrackKey::new("Song — Artist")));
    }
}
