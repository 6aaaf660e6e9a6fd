use super::FetchError;

/// Errors raised by a playback provider.
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    /// The provider asked us to back off.
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Seconds from the `Retry-After` header.
        retry_after_secs: u64,
    },

    /// The provider answered with an unexpected status.
    #[error("Provider error ({status}): {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The provider could not be reached (connect failure or timeout).
    #[error("Provider unreachable: {0}")]
    Unreachable(String),

    /// Any other transport failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The access token was rejected or has expired.
    #[error("Authentication required")]
    AuthRequired,

    /// No access token was configured.
    #[error("No access token found in ${0}")]
    MissingToken(String),

    /// The control action needs an active device and there is none.
    #[error("No active playback device")]
    NoActiveDevice,
}

impl PlaybackError {
    /// Classification carried by the snapshot that replaces a failed fetch.
    pub fn classify(&self) -> FetchError {
        match self {
            PlaybackError::RateLimited { retry_after_secs } => FetchError::RateLimited {
                retry_after_secs: *retry_after_secs,
            },
            _ => FetchError::Transient,
        }
    }
}
