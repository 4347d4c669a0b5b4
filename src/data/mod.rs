//! Data models and processing for sensor readings.
//!
//! ## Submodules
//!
//! - [`health`]: Health score, needle angle and status tiers
//! - [`dashboard`]: View-model for the dashboard panel ([`Dashboard`])
//! - [`trend`]: Fixed weekly trend chart
//! - [`advisory`]: Corrective actions against the crop's optimum conditions
//! - [`profile`]: Crop and growing schedule
//! - [`duration`]: Parsing and formatting of interval strings (e.g. "5s")
//!
//! ## Data Flow
//!
//! ```text
//! SensorReading (poll outcome)
//!        │
//!        ├──▶ Dashboard::apply_reading() ──▶ health::score() ──▶ Gauge
//!        │
//!        └──▶ advisory::advise() (Alerts view)
//! ```

pub mod advisory;
pub mod dashboard;
pub mod duration;
pub mod health;
pub mod profile;
pub mod trend;

pub use advisory::{advise, Advisory, OptimumConditions};
pub use dashboard::{Dashboard, SensorBar};
pub use health::{needle_angle, score, Gauge, HealthStatus, HealthTier, StatusStyle};
pub use profile::GardenProfile;
pub use trend::{TrendBar, TrendChart};
