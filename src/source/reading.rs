//! Wire format for sensor readings.
//!
//! The sensor endpoint answers `GET` with a flat JSON object:
//!
//! ```json
//! { "moisture": 42.0, "humidity": 61.5, "temperature": 23.4 }
//! ```

use serde::{Deserialize, Serialize};

use super::FetchError;

/// One sampled set of sensor values for a single poll.
///
/// All three fields are required and must be JSON numbers. Values are not
/// range-checked: a moisture of 130 or a temperature of -40 is passed through
/// as reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Soil moisture, percent (nominally 0-100).
    pub moisture: f64,
    /// Relative air humidity, percent (nominally 0-100).
    pub humidity: f64,
    /// Air temperature in °C.
    pub temperature: f64,
}

impl SensorReading {
    pub fn new(moisture: f64, humidity: f64, temperature: f64) -> Self {
        Self {
            moisture,
            humidity,
            temperature,
        }
    }

    /// Parse a reading from a response body.
    ///
    /// Missing keys, non-numeric values and non-JSON bodies are all
    /// rejected with [`FetchError::Parse`]. Extra keys are ignored.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Result of one poll of a data source.
pub type PollOutcome = Result<SensorReading, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reading() {
        let body = r#"{"moisture": 42, "humidity": 61.5, "temperature": 23.4}"#;
        let reading = SensorReading::from_json(body).unwrap();
        assert_eq!(reading.moisture, 42.0);
        assert_eq!(reading.humidity, 61.5);
        assert_eq!(reading.temperature, 23.4);
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"moisture": 10, "humidity": 20, "temperature": 30, "light": 900}"#;
        let reading = SensorReading::from_json(body).unwrap();
        assert_eq!(reading, SensorReading::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let body = r#"{"moisture": 10, "humidity": 20}"#;
        let err = SensorReading::from_json(body).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_parse_rejects_string_value() {
        let body = r#"{"moisture": "10", "humidity": 20, "temperature": 30}"#;
        let err = SensorReading::from_json(body).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_null_value() {
        let body = r#"{"moisture": null, "humidity": 20, "temperature": 30}"#;
        let err = SensorReading::from_json(body).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let body = "<html>502 Bad Gateway</html>";
        let err = SensorReading::from_json(body).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let body = r#"{"moisture": 130, "humidity": -5, "temperature": -40}"#;
        let reading = SensorReading::from_json(body).unwrap();
        assert_eq!(reading.moisture, 130.0);
        assert_eq!(reading.humidity, -5.0);
        assert_eq!(reading.temperature, -40.0);
    }
}
