use std::env;

use async_trait::async_trait;
use reqwest::{
    Client, RequestBuilder, Response, StatusCode,
    header::{CONTENT_LENGTH, RETRY_AFTER},
};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{CurrentPlayback, PlaybackError, PlaybackItem, PlaybackProvider};
use crate::config::ProviderConfig;

/// Retry-after assumed when a 429 response carries no usable header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// Playback provider backed by the Spotify Web API.
///
/// Authentication is limited to a bearer token handed in by the caller;
/// obtaining and refreshing it is left to an external helper.
pub struct SpotifyProvider {
    http: Client,
    api_base: String,
    access_token: String,
}

impl SpotifyProvider {
    /// Create a provider for `config.api_base` using the given token.
    ///
    /// # Errors
    /// Returns `PlaybackError::Request` if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig, access_token: impl Into<String>) -> Result<Self, PlaybackError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(format!(
                "nowplaying-overlay/{}",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    /// Create a provider reading the token from `config.access_token_env`.
    ///
    /// # Errors
    /// Returns `PlaybackError::MissingToken` if the variable is unset or empty.
    pub fn from_env(config: &ProviderConfig) -> Result<Self, PlaybackError> {
        let token = env::var(&config.access_token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| PlaybackError::MissingToken(config.access_token_env.clone()))?;

        Self::new(config, token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, PlaybackError> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    PlaybackError::Unreachable(e.to_string())
                } else {
                    PlaybackError::Request(e)
                }
            })?;

        check_status(response).await
    }

    async fn command(&self, request: RequestBuilder) -> Result<(), PlaybackError> {
        self.send(request.header(CONTENT_LENGTH, 0)).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response, PlaybackError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(PlaybackError::AuthRequired),
        StatusCode::NOT_FOUND => Err(PlaybackError::NoActiveDevice),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after_secs = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

            Err(PlaybackError::RateLimited { retry_after_secs })
        }
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(PlaybackError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl PlaybackProvider for SpotifyProvider {
    #[instrument(skip(self))]
    async fn current_playback(&self) -> Result<Option<CurrentPlayback>, PlaybackError> {
        let response = self.send(self.http.get(self.url("/me/player"))).await?;

        if response.status() == StatusCode::NO_CONTENT {
            debug!("No active playback session");
            return Ok(None);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let state: PlayerState = serde_json::from_str(&body)
            .map_err(|e| PlaybackError::Parse(format!("Failed to parse player state: {e}")))?;

        Ok(Some(state.into()))
    }

    async fn previous_track(&self) -> Result<(), PlaybackError> {
        self.command(self.http.post(self.url("/me/player/previous")))
            .await
    }

    async fn next_track(&self) -> Result<(), PlaybackError> {
        self.command(self.http.post(self.url("/me/player/next"))).await
    }

    async fn pause_playback(&self) -> Result<(), PlaybackError> {
        self.command(self.http.put(self.url("/me/player/pause"))).await
    }

    async fn start_playback(&self) -> Result<(), PlaybackError> {
        self.command(self.http.put(self.url("/me/player/play"))).await
    }

    async fn set_volume(&self, percent: u8) -> Result<(), PlaybackError> {
        let percent = percent.min(100);
        self.command(
            self.http
                .put(self.url("/me/player/volume"))
                .query(&[("volume_percent", percent)]),
        )
        .await
    }
}

#[derive(Debug, Deserialize)]
struct PlayerState {
    #[serde(default)]
    is_playing: bool,
    progress_ms: Option<u64>,
    item: Option<ItemObject>,
    device: Option<DeviceObject>,
}

#[derive(Debug, Deserialize)]
struct ItemObject {
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    artists: Vec<NamedObject>,
    show: Option<NamedObject>,
    duration_ms: Option<u64>,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
struct NamedObject {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeviceObject {
    volume_percent: Option<u8>,
}

impl From<PlayerState> for CurrentPlayback {
    fn from(state: PlayerState) -> Self {
        let item = state.item.map(|item| {
            let mut artists: Vec<String> = item.artists.into_iter().map(|a| a.name).collect();
            if artists.is_empty() {
                artists.extend(item.show.map(|show| show.name));
            }

            PlaybackItem {
                id: item.id,
                name: item.name,
                artists,
                duration_ms: item.duration_ms,
                url: item.external_urls.spotify,
            }
        });

        CurrentPlayback {
            is_playing: state.is_playing,
            progress_ms: state.progress_ms,
            item,
            device_volume: state.device.and_then(|device| device.volume_percent),
        }
    }
}
