//! Channel-based data source.
//!
//! Receives poll outcomes via a tokio watch channel. Useful when readings are
//! pushed by something else in the process (a gateway bridge, a test
//! harness) rather than fetched by the built-in poll loop.

use tokio::sync::watch;

use super::{DataSource, PollOutcome};

/// A data source that receives outcomes via a channel.
///
/// Only the most recent outcome is kept; intermediate values sent between
/// two polls are skipped.
///
/// # Example
///
/// ```
/// use garden_doctor::{ChannelSource, DataSource, SensorReading};
///
/// let (tx, mut source) = ChannelSource::create("gateway");
/// tx.send(Some(Ok(SensorReading::new(40.0, 65.0, 25.0)))).unwrap();
/// assert!(source.poll().is_some());
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<Option<PollOutcome>>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - Where outcomes come from, for the status bar
    pub fn new(receiver: watch::Receiver<Option<PollOutcome>>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {}", source_description),
        }
    }

    /// Create a channel pair for sending outcomes to a ChannelSource.
    ///
    /// The channel starts empty; the first `poll` returns `None` until
    /// something is sent.
    pub fn create(source_description: &str) -> (watch::Sender<Option<PollOutcome>>, Self) {
        let (tx, rx) = watch::channel(None);
        (tx, Self::new(rx, source_description))
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<PollOutcome> {
        if self.receiver.has_changed().unwrap_or(false) {
            self.receiver.borrow_and_update().clone()
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}
