//! # garden-doctor
//!
//! A terminal dashboard and library for monitoring a garden sensor.
//!
//! A background poll loop fetches soil moisture, humidity and temperature
//! from the sensor's HTTP endpoint every few seconds. Each reading is turned
//! into a plant health score, drawn as a dial alongside the raw sensor
//! values, and checked against the crop's optimum conditions. A failed fetch
//! marks the sensor offline without disturbing the last values shown.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (scoring)│    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── PollSource | FileSource | ChannelSource    │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view routing and the settings editor
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait), the HTTP
//!   client and the fixed-interval [`PollLoop`]
//! - **[`data`]**: Health score, gauge and trend view-models, advisories
//! - **[`config`]**: Layered [`Settings`] from defaults, file and environment
//! - **[`ui`]**: Terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Poll the default sensor endpoint every 5 seconds
//! garden-doctor
//!
//! # Poll a different gateway, faster
//! garden-doctor --endpoint http://10.0.0.7:5000/sensor --interval 2s
//!
//! # Fetch once and print the score as JSON
//! garden-doctor --once
//! ```
//!
//! ### Scoring a reading
//!
//! ```
//! use garden_doctor::{score, Gauge, HealthStatus, HealthTier, SensorReading};
//!
//! let reading = SensorReading::new(80.0, 80.0, 30.0);
//! let mut gauge = Gauge::default();
//! gauge.update(score(&reading));
//! assert_eq!(gauge.status, HealthStatus::Tier(HealthTier::Good));
//! ```
//!
//! ### As a library with channel source
//!
//! ```
//! use garden_doctor::{App, ChannelSource, GardenProfile, OptimumConditions, SensorReading};
//! # use chrono::{TimeZone, Utc};
//!
//! let (tx, source) = ChannelSource::create("test harness");
//! # let profile = GardenProfile {
//! #     crop_name: "onions".to_string(),
//! #     start_date: Utc.with_ymd_and_hms(2025, 11, 28, 0, 0, 0).unwrap(),
//! #     total_days: 30,
//! # };
//! let mut app = App::new(Box::new(source), OptimumConditions::default(), profile);
//!
//! tx.send(Some(Ok(SensorReading::new(40.0, 65.0, 25.0)))).unwrap();
//! app.reload_data();
//! assert_eq!(app.online, Some(true));
//! ```
//!
//! ### Polling an HTTP sensor
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use garden_doctor::{DataSource, HttpSensorClient, PollLoop};
//!
//! # tokio_test::block_on(async {
//! let client = HttpSensorClient::new("http://192.168.1.100:5000/sensor", None).unwrap();
//! let mut source = PollLoop::spawn(Arc::new(client), Duration::from_secs(5));
//! tokio::time::sleep(Duration::from_secs(1)).await;
//! if let Some(outcome) = source.poll() {
//!     println!("{:?}", outcome);
//! }
//! # });
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use config::Settings;
pub use data::{
    advise, score, Advisory, Dashboard, GardenProfile, Gauge, HealthStatus, HealthTier,
    OptimumConditions, TrendChart,
};
pub use source::{
    ChannelSource, DataSource, FetchError, FileSource, HttpSensorClient, PollLoop, PollOutcome,
    PollSource, SensorFetcher, SensorReading,
};
