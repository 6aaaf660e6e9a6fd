use std::{io::Write, sync::Arc};

use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use super::{
    CliError,
    formatting::{format_play_state, format_progress_bar},
};
use crate::{
    config::Config,
    hotkeys::Hotkey,
    overlay::{DisplaySink, OverlayController},
    services::playback::{
        PlaybackControls, PlaybackProvider, PollScheduler, PollWorker, SnapshotFetcher,
        SpotifyProvider,
    },
};

const BAR_WIDTH: usize = 30;

/// Display sink that renders updates as lines on a terminal.
///
/// Progress is only printed when the whole percentage changes, otherwise
/// the interpolation tick would flood the output.
pub struct ConsoleDisplay<W: Write> {
    out: W,
    text: String,
    playing: bool,
    last_percent: Option<u16>,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Console display writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            text: String::new(),
            playing: false,
            last_percent: None,
        }
    }

    /// The writer, for inspecting what was printed.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!(error = %e, "Failed to write display update");
        }
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn on_text_changed(&mut self, text: &str) {
        self.text = text.to_string();
        let line = format!("{} {}", format_play_state(self.playing), self.text);
        self.print_line(&line);
    }

    fn on_progress_changed(&mut self, permille: u16) {
        let percent = permille / 10;
        if self.last_percent == Some(percent) {
            return;
        }
        self.last_percent = Some(percent);

        let line = format!("{} {percent:>3}%", format_progress_bar(permille, BAR_WIDTH));
        self.print_line(&line);
    }

    fn on_playing_changed(&mut self, playing: bool) {
        self.playing = playing;
        let line = format!("{} {}", format_play_state(playing), self.text);
        self.print_line(&line);
    }
}

/// Run the overlay headless until Ctrl-C.
///
/// Hotkey names (`toggle`, `next`, `vol+`, ...) typed on stdin, one per
/// line, are routed to the playback controls.
///
/// # Errors
/// Returns `CliError::ServiceError` if the provider cannot be created.
#[instrument(skip_all)]
pub async fn run_overlay(config: Config) -> Result<(), CliError> {
    let spotify = SpotifyProvider::from_env(&config.provider)
        .map_err(|e| CliError::ServiceError(e.to_string()))?;
    let provider: Arc<dyn PlaybackProvider> = Arc::new(spotify);

    let cancel = CancellationToken::new();
    let (cycles_tx, cycles_rx) = mpsc::unbounded_channel();
    let (hotkeys_tx, hotkeys_rx) = mpsc::unbounded_channel();

    let worker = PollWorker::new(
        SnapshotFetcher::new(Arc::clone(&provider)),
        PollScheduler::new(&config.polling),
        cycles_tx,
        cancel.clone(),
    )
    .spawn();

    let controls = PlaybackControls::new(provider, &config.controls);
    let controller = OverlayController::new(
        &config.progress,
        ConsoleDisplay::new(std::io::stdout()),
        Some(controls),
    );

    tokio::spawn(read_hotkeys(hotkeys_tx, cancel.clone()));
    tokio::spawn(cancel_on_ctrl_c(cancel.clone()));

    controller.run(cycles_rx, hotkeys_rx, cancel.clone()).await;
    cancel.cancel();

    if let Err(e) = worker.await {
        warn!(error = %e, "Poll worker ended abnormally");
    }

    info!("Overlay stopped");
    Ok(())
}

async fn read_hotkeys(hotkeys: mpsc::UnboundedSender<Hotkey>, cancel: CancellationToken) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line,
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "Failed to read hotkeys from stdin");
                break;
            }
        };

        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        match name.parse::<Hotkey>() {
            Ok(hotkey) => {
                if hotkeys.send(hotkey).is_err() {
                    break;
                }
            }
            Err(e) => warn!(error = %e, "Ignoring input"),
        }
    }
}

async fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                warn!(error = %e, "Failed to listen for Ctrl-C");
                return;
            }
            info!("Interrupted, shutting down");
            cancel.cancel();
        }
    }
}
