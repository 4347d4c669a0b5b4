//! Fixed-interval poll loop.
//!
//! A single background task owns a [`tokio::time::interval`] and, on every
//! tick, spawns an independent fetch. Outcomes are funnelled back through an
//! unbounded channel and drained by the UI loop via [`DataSource::poll`].
//!
//! ```text
//!  interval ──tick──▶ spawn(fetch) ──outcome──▶ mpsc ──try_recv──▶ App
//!     │                  spawn(fetch) ──outcome──┘
//!     └── 5s ──tick──▶ ...
//! ```
//!
//! Fetches are not serialized: if one is still in flight when the next tick
//! fires, both run. In-flight fetches belong to the loop task, so stopping
//! the loop cancels them too. Because the loop uses tokio's clock, tests can drive it
//! with a paused runtime and `tokio::time::advance`.

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::{DataSource, FetchError, PollOutcome, SensorReading};
use crate::data::duration::format_duration;

/// Default polling period.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Something that can produce one sensor reading on demand.
///
/// [`HttpSensorClient`](super::HttpSensorClient) is the production
/// implementation; tests substitute scripted fetchers.
#[async_trait]
pub trait SensorFetcher: Send + Sync + Debug {
    /// Fetch a single reading.
    async fn fetch(&self) -> Result<SensorReading, FetchError>;

    /// Short description of where readings come from (e.g. the URL).
    fn describe(&self) -> String;
}

/// Spawns the repeating poll task.
pub struct PollLoop;

impl PollLoop {
    /// Start polling `fetcher` every `period`.
    ///
    /// The first fetch is issued immediately. Must be called from within a
    /// tokio runtime. Dropping the returned source stops polling and cancels
    /// any fetch still in flight.
    pub fn spawn(fetcher: Arc<dyn SensorFetcher>, period: Duration) -> PollSource {
        let (tx, rx) = mpsc::unbounded_channel();
        let description = format!(
            "poll: {} every {}",
            fetcher.describe(),
            format_duration(period)
        );

        info!(target: "poll", source = %fetcher.describe(), period = ?period, "Starting poll loop");

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // In-flight fetches live and die with this task
            let mut fetches = JoinSet::new();
            let mut tick: u64 = 0;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    Some(_) = fetches.join_next(), if !fetches.is_empty() => continue,
                }
                if tx.is_closed() {
                    break;
                }
                tick += 1;
                debug!(target: "poll", tick, in_flight = fetches.len(), "Poll tick");

                let fetcher = fetcher.clone();
                let tx = tx.clone();
                fetches.spawn(async move {
                    let outcome = fetcher.fetch().await;
                    // Receiver gone means the app is shutting down
                    let _ = tx.send(outcome);
                });
            }
        });

        PollSource {
            receiver: rx,
            description,
            task,
        }
    }
}

/// Receiving end of a [`PollLoop`].
#[derive(Debug)]
pub struct PollSource {
    receiver: mpsc::UnboundedReceiver<PollOutcome>,
    description: String,
    task: JoinHandle<()>,
}

impl DataSource for PollSource {
    fn poll(&mut self) -> Option<PollOutcome> {
        self.receiver.try_recv().ok()
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Drop for PollSource {
    fn drop(&mut self) {
        self.task.abort();
    }
}
