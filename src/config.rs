//! Runtime configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `GARDEN_DOCTOR__*` environment variables (double underscore separates
//! nesting, e.g. `GARDEN_DOCTOR__OPTIMUM__MOISTURE=45`). Command-line flags
//! are applied on top by the binary.
//!
//! ```toml
//! endpoint = "http://192.168.1.100:5000/sensor"
//! interval = "5s"
//!
//! [optimum]
//! temperature = 25.0
//! humidity = 65.0
//! moisture = 40.0
//! tolerance = 3.0
//!
//! [profile]
//! crop_name = "onions"
//! start_date = "2025-11-28T00:00:00Z"
//! total_days = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::duration::parse_duration;
use crate::data::{GardenProfile, OptimumConditions};
use crate::source::DEFAULT_ENDPOINT;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "GARDEN_DOCTOR";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Sensor endpoint URL.
    pub endpoint: String,
    /// Poll period, as a duration string.
    pub interval: String,
    /// Per-request timeout; unset means requests are not bounded.
    #[serde(default)]
    pub request_timeout: Option<String>,
    /// Where tracing output goes (stdout belongs to the TUI).
    pub log_file: PathBuf,
    pub optimum: OptimumConditions,
    pub profile: GardenProfile,
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = OptimumConditions::default();
        let mut builder = Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("interval", "5s")?
            .set_default("log_file", "garden-doctor.log")?
            .set_default("optimum.temperature", defaults.temperature)?
            .set_default("optimum.humidity", defaults.humidity)?
            .set_default("optimum.moisture", defaults.moisture)?
            .set_default("optimum.tolerance", defaults.tolerance)?
            .set_default("profile.crop_name", "onions")?
            .set_default("profile.start_date", "2025-11-28T00:00:00Z")?
            .set_default("profile.total_days", 30_i64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .context("failed to load configuration")?;

        config.try_deserialize().context("invalid configuration")
    }

    /// Parsed poll period.
    pub fn poll_interval(&self) -> Result<Duration> {
        let period = parse_duration(&self.interval)?;
        anyhow::ensure!(!period.is_zero(), "poll interval must be greater than zero");
        Ok(period)
    }

    /// Parsed request timeout, if one is configured.
    pub fn request_timeout(&self) -> Result<Option<Duration>> {
        match self.request_timeout.as_deref() {
            Some(text) => parse_duration(text).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(contents: &str) -> NamedTempFile {
        let mut builder = tempfile::Builder::new();
        builder.suffix(".toml");
        let mut file = builder.tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.poll_interval().unwrap(), Duration::from_secs(5));
        assert_eq!(settings.request_timeout().unwrap(), None);
        assert_eq!(settings.optimum, OptimumConditions::default());
        assert_eq!(settings.profile.crop_name, "onions");
        assert_eq!(settings.profile.total_days, 30);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file(
            r#"
endpoint = "http://10.0.0.7:8080/sensor"
interval = "2s"
request_timeout = "1500ms"

[optimum]
moisture = 55.0

[profile]
crop_name = "tomatoes"
total_days = 90
"#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.endpoint, "http://10.0.0.7:8080/sensor");
        assert_eq!(settings.poll_interval().unwrap(), Duration::from_secs(2));
        assert_eq!(
            settings.request_timeout().unwrap(),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(settings.optimum.moisture, 55.0);
        // Untouched keys keep their defaults
        assert_eq!(settings.optimum.humidity, 65.0);
        assert_eq!(settings.profile.crop_name, "tomatoes");
        assert_eq!(settings.profile.total_days, 90);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let file = toml_file(r#"interval = "0s""#);

        let settings = Settings::load(Some(file.path())).unwrap();
        assert!(settings.poll_interval().is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = Settings::load(Some(Path::new("/nonexistent/garden.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_nested_key() {
        // No other test reads the start date, so setting it here cannot race
        let var = "GARDEN_DOCTOR__PROFILE__START_DATE";
        std::env::set_var(var, "2026-03-01T00:00:00Z");
        let loaded = Settings::load(None);
        std::env::remove_var(var);

        let settings = loaded.unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(settings.profile.start_date, expected);
        // Siblings keep their defaults
        assert_eq!(settings.profile.total_days, 30);
    }
}
