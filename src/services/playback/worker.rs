use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use super::{FetchCycle, PollScheduler, SnapshotFetcher};

/// Background fetch-and-sleep loop.
///
/// Runs one fetch per cycle, forwards the result over an ordered channel and
/// sleeps for the scheduler's delay. The worker never touches display state
/// itself; the receiving side owns all of it.
///
/// The loop ends when the token is cancelled (checked before each fetch and
/// while sleeping) or when the receiver is dropped.
pub struct PollWorker {
    fetcher: SnapshotFetcher,
    scheduler: PollScheduler,
    events: mpsc::UnboundedSender<FetchCycle>,
    cancel: CancellationToken,
}

impl PollWorker {
    /// Create a worker that reports cycles to `events`.
    pub fn new(
        fetcher: SnapshotFetcher,
        scheduler: PollScheduler,
        events: mpsc::UnboundedSender<FetchCycle>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            fetcher,
            scheduler,
            events,
            cancel,
        }
    }

    /// Spawn the loop on the current runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Run the loop until cancelled.
    #[instrument(name = "poll_worker", skip_all)]
    pub async fn run(mut self) {
        info!("Playback polling started");

        loop {
            if self.cancel.is_cancelled() {
                break;
            }

            let cycle = tokio::select! {
                _ = self.cancel.cancelled() => break,
                cycle = self.fetcher.fetch() => cycle,
            };
            let delay = self.scheduler.next_delay(&cycle.snapshot);

            debug!(
                state = ?cycle.snapshot.state(),
                error = ?cycle.snapshot.fetch_error,
                next_poll_ms = delay.as_millis() as u64,
                "Poll cycle complete"
            );

            if self.events.send(cycle).is_err() {
                debug!("Event receiver dropped");
                break;
            }

            tokio::select! {
                _ = self.cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        info!("Playback polling stopped");
    }
}
