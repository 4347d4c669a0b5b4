//! Data source abstraction for receiving sensor readings.
//!
//! The UI loop never blocks on I/O. Every source hands back already-finished
//! [`PollOutcome`]s through a non-blocking [`DataSource::poll`]; where the
//! actual fetching happens (a background poll loop, a file, a channel) is the
//! source's business.

mod channel;
mod error;
mod file;
mod http;
pub mod poller;
mod reading;

pub use channel::ChannelSource;
pub use error::FetchError;
pub use file::FileSource;
pub use http::{HttpSensorClient, DEFAULT_ENDPOINT};
pub use poller::{PollLoop, PollSource, SensorFetcher, DEFAULT_POLL_INTERVAL};
pub use reading::{PollOutcome, SensorReading};

use std::fmt::Debug;

/// Trait for receiving sensor outcomes from various sources.
///
/// # Example
///
/// ```
/// use garden_doctor::{DataSource, FileSource};
///
/// let mut source = FileSource::new("reading.json");
/// match source.poll() {
///     Some(Ok(reading)) => println!("moisture {}%", reading.moisture),
///     Some(Err(e)) => println!("offline: {}", e),
///     None => {}
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Take the next finished outcome, if any.
    ///
    /// Returns `None` when nothing new is available. Must not block.
    fn poll(&mut self) -> Option<PollOutcome>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
