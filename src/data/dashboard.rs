//! Dashboard view-model.
//!
//! Everything the dashboard panel draws lives here, so the render layer is a
//! pure function of this struct and readings can be applied without a
//! terminal.

use chrono::{DateTime, Local};

use super::health::{score, Gauge};
use super::trend::TrendChart;
use crate::source::SensorReading;

/// Temperature that maps to an empty temperature bar, °C.
const TEMPERATURE_BAR_MIN: f64 = 15.0;

/// Temperature range covered by the temperature bar, °C.
const TEMPERATURE_BAR_SPAN: f64 = 15.0;

/// One labelled progress bar for a sensor value.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorBar {
    pub label: &'static str,
    /// Display text, e.g. "42%" or "23.5°C"; "--" before the first reading.
    pub text: String,
    /// Fill percentage as computed, may lie outside 0-100.
    pub percent: f64,
}

impl SensorBar {
    fn empty(label: &'static str) -> Self {
        Self {
            label,
            text: "--".to_string(),
            percent: 0.0,
        }
    }

    /// Fill ratio clamped to what a progress bar can draw.
    pub fn ratio(&self) -> f64 {
        if self.percent.is_finite() {
            (self.percent / 100.0).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Live state of the dashboard panel.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Last successfully received reading.
    pub reading: Option<SensorReading>,
    pub gauge: Gauge,
    pub trend: TrendChart,
    pub last_update: DateTime<Local>,
}

impl Dashboard {
    /// Seeded dashboard: gauge at the seed score, trend drawn.
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            reading: None,
            gauge: Gauge::default(),
            trend: TrendChart::new(),
            last_update: now,
        }
    }

    /// Show a new reading and rescore.
    pub fn apply_reading(&mut self, reading: SensorReading, now: DateTime<Local>) {
        self.gauge.update(score(&reading));
        self.reading = Some(reading);
        self.last_update = now;
    }

    /// Flag the sensor as offline; values from the last reading stay on screen.
    pub fn mark_offline(&mut self) {
        self.gauge.mark_offline();
    }

    /// "Last updated" clock text.
    pub fn last_update_text(&self) -> String {
        self.last_update.format("%H:%M:%S").to_string()
    }

    /// Moisture, humidity and temperature bars, in that order.
    pub fn sensor_bars(&self) -> [SensorBar; 3] {
        let Some(r) = self.reading else {
            return [
                SensorBar::empty("Soil Moisture"),
                SensorBar::empty("Humidity"),
                SensorBar::empty("Temperature"),
            ];
        };

        [
            SensorBar {
                label: "Soil Moisture",
                text: format!("{}%", r.moisture),
                percent: r.moisture,
            },
            SensorBar {
                label: "Humidity",
                text: format!("{}%", r.humidity),
                percent: r.humidity,
            },
            SensorBar {
                label: "Temperature",
                text: format!("{}°C", r.temperature),
                percent: (r.temperature - TEMPERATURE_BAR_MIN) / TEMPERATURE_BAR_SPAN * 100.0,
            },
        ]
    }
}
