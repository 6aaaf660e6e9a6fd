use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Connection settings for the playback Web API.
///
/// The access token itself is never stored in the config file; only the
/// name of the environment variable holding it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the Web API, without a trailing slash.
    pub api_base: String,

    /// Environment variable holding the bearer token.
    pub access_token_env: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.spotify.com/v1".to_string(),
            access_token_env: "SPOTIFY_ACCESS_TOKEN".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl ProviderConfig {
    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
