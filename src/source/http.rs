//! HTTP sensor client.
//!
//! Issues a single unauthenticated `GET` against the sensor endpoint and
//! parses the body into a [`SensorReading`].

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::poller::SensorFetcher;
use super::{FetchError, SensorReading};

/// Default sensor endpoint served by the garden's gateway.
pub const DEFAULT_ENDPOINT: &str = "http://192.168.1.100:5000/sensor";

/// Fetches readings from an HTTP endpoint.
///
/// The endpoint is fixed at construction time. No headers, query parameters
/// or retries are involved; a failed request is simply reported to the
/// caller and the next poll tick tries again.
#[derive(Debug, Clone)]
pub struct HttpSensorClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSensorClient {
    /// Create a client for `endpoint`.
    ///
    /// `request_timeout` bounds each request; `None` leaves requests
    /// unbounded so a hung request only delays its own tick.
    pub fn new(
        endpoint: impl Into<String>,
        request_timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one reading.
    ///
    /// The body is parsed whatever the status code: a reading served with an
    /// error status is still a reading. A non-2xx response whose body does not
    /// parse is reported as [`FetchError::Status`].
    pub async fn fetch_reading(&self) -> Result<SensorReading, FetchError> {
        debug!(target: "sensor", endpoint = %self.endpoint, "Fetching sensor data");

        let response = match self.client.get(&self.endpoint).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(target: "sensor", error = %e, "Sensor request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        let body = response.text().await?;

        match SensorReading::from_json(&body) {
            Ok(reading) => {
                if !status.is_success() {
                    debug!(target: "sensor", status = %status, "Reading with error status");
                }
                Ok(reading)
            }
            Err(_) if !status.is_success() => {
                warn!(target: "sensor", status = %status, "Sensor endpoint returned error");
                Err(FetchError::Status(status.as_u16()))
            }
            Err(e) => {
                warn!(target: "sensor", error = %e, "Failed to parse sensor response");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl SensorFetcher for HttpSensorClient {
    async fn fetch(&self) -> Result<SensorReading, FetchError> {
        self.fetch_reading().await
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
