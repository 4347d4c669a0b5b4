//! Error types for sensor data sources.

use thiserror::Error;

/// Errors that can occur while fetching a sensor reading.
///
/// Every variant is surfaced to the user the same way (the dashboard goes
/// "Sensor Offline"); the distinction only matters for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// The body was not a JSON object with numeric `moisture`, `humidity`
    /// and `temperature` fields.
    #[error("failed to parse reading: {0}")]
    Parse(String),

    /// Reading a local reading file failed.
    #[error("read error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}
