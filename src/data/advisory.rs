//! Growing-condition advisories.
//!
//! Compares a reading against the crop's optimum conditions and produces the
//! corrective actions the irrigation controller would take.

use serde::{Deserialize, Serialize};

use crate::source::SensorReading;

/// Target conditions for the current crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimumConditions {
    /// Target air temperature, °C.
    pub temperature: f64,
    /// Target relative humidity, %.
    pub humidity: f64,
    /// Target soil moisture, %.
    pub moisture: f64,
    /// Allowed deviation either side of each target.
    pub tolerance: f64,
}

impl Default for OptimumConditions {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            humidity: 65.0,
            moisture: 40.0,
            tolerance: 3.0,
        }
    }
}

/// A single corrective action (or the all-clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    TemperatureLow,
    TemperatureHigh,
    MoistureLow,
    MoistureHigh,
    HumidityLow,
    HumidityHigh,
    WithinRange,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::TemperatureLow => "temperature low -> enhancing insulation",
            Advisory::TemperatureHigh => "temperature high -> fan ON",
            Advisory::MoistureLow => "moisture low -> irrigation ON",
            Advisory::MoistureHigh => "moisture high -> irrigation OFF",
            Advisory::HumidityLow => "humidity low -> reduce ventilation",
            Advisory::HumidityHigh => "humidity high -> increase ventilation",
            Advisory::WithinRange => "within range",
        }
    }

    /// Whether this advisory calls for attention.
    pub fn is_actionable(&self) -> bool {
        *self != Advisory::WithinRange
    }
}

/// Which way a value sits relative to `target ± tolerance`.
fn deviation(value: f64, target: f64, tolerance: f64) -> Option<bool> {
    if value < target - tolerance {
        Some(false)
    } else if value > target + tolerance {
        Some(true)
    } else {
        None
    }
}

/// Advisories for a reading, ordered temperature, moisture, humidity.
///
/// Returns `[WithinRange]` when every value is inside its tolerance band.
pub fn advise(reading: &SensorReading, optimum: &OptimumConditions) -> Vec<Advisory> {
    let tol = optimum.tolerance;
    let checks = [
        (
            deviation(reading.temperature, optimum.temperature, tol),
            Advisory::TemperatureLow,
            Advisory::TemperatureHigh,
        ),
        (
            deviation(reading.moisture, optimum.moisture, tol),
            Advisory::MoistureLow,
            Advisory::MoistureHigh,
        ),
        (
            deviation(reading.humidity, optimum.humidity, tol),
            Advisory::HumidityLow,
            Advisory::HumidityHigh,
        ),
    ];

    let advisories: Vec<Advisory> = checks
        .into_iter()
        .filter_map(|(above, low, high)| Some(if above? { high } else { low }))
        .collect();

    if advisories.is_empty() {
        vec![Advisory::WithinRange]
    } else {
        advisories
    }
}
