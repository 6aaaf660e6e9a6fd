//! Playback polling, normalization and progress interpolation.
//!
//! The pieces, leaf first:
//! - [`PlaybackProvider`]: the external API, with [`SpotifyProvider`] as the
//!   Web API implementation
//! - [`SnapshotFetcher`]: one query per call, normalized into a [`PlaybackSnapshot`]
//! - [`PollScheduler`]: delay before the next query
//! - [`PollWorker`]: the cancellable background loop tying the two together
//! - [`ProgressReconciler`]: smooth local progress between fetches
//! - [`PlaybackControls`]: fire-and-forget control commands

mod controls;
mod error;
mod fetcher;
mod provider;
mod reconciler;
mod scheduler;
mod spotify;
mod types;
mod worker;

pub use controls::PlaybackControls;
pub use error::PlaybackError;
pub use fetcher::{FetchCycle, SnapshotFetcher, normalize};
pub use provider::PlaybackProvider;
pub use reconciler::ProgressReconciler;
pub use scheduler::PollScheduler;
pub use spotify::SpotifyProvider;
pub use types::*;
pub use worker::PollWorker;
