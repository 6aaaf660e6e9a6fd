//! nowplaying-overlay - engine of a small "now playing" desktop widget.
//!
//! The widget polls a music-playback API, shows the current track with a
//! smoothly moving progress bar and can be dragged around the screen with
//! edge snapping. This crate holds everything except the drawing:
//!
//! - Adaptive background polling with rate-limit backoff
//! - Local progress interpolation reconciled against fetched positions
//! - Edge snapping, bounds clamping and persisted window placement
//! - Playback controls driven by named hotkey events
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use nowplaying_overlay::{
//!     config::Config,
//!     overlay::{DisplayState, OverlayController},
//!     services::playback::{
//!         PlaybackControls, PollScheduler, PollWorker, SnapshotFetcher, SpotifyProvider,
//!     },
//! };
//! use tokio::sync::mpsc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let provider = Arc::new(SpotifyProvider::from_env(&config.provider)?);
//! let cancel = CancellationToken::new();
//!
//! let (cycle_tx, cycle_rx) = mpsc::unbounded_channel();
//! let (_hotkey_tx, hotkey_rx) = mpsc::unbounded_channel();
//!
//! PollWorker::new(
//!     SnapshotFetcher::new(provider.clone()),
//!     PollScheduler::new(&config.polling),
//!     cycle_tx,
//!     cancel.clone(),
//! )
//! .spawn();
//!
//! let display = DisplayState::default();
//! let controls = PlaybackControls::new(provider, &config.controls);
//! OverlayController::new(&config.progress, display.clone(), Some(controls))
//!     .run(cycle_rx, hotkey_rx, cancel)
//!     .await;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

/// Command-line interface.
pub mod cli;

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod error;

/// Named hotkey events.
pub mod hotkeys;

/// UI-side controller and display sinks.
pub mod overlay;

/// Polling, placement and shared service building blocks.
pub mod services;

/// Logging setup.
pub mod tracing_config;

pub use error::{OverlayError, Result};
