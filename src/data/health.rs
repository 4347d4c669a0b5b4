//! Health scoring and gauge mapping.
//!
//! A reading is reduced to a single score, the score drives a half-dial
//! needle and one of four status tiers.

use crate::source::SensorReading;

/// Score shown before the first successful poll.
pub const SEED_SCORE: f64 = 75.0;

/// Weight of each scored term.
const TERM_WEIGHT: f64 = 25.0;

/// Temperature at which the temperature term is zero, °C.
const TEMPERATURE_BASE: f64 = 18.0;

/// Temperature span that earns the full temperature term, °C.
const TEMPERATURE_SPAN: f64 = 8.0;

/// Compute the plant health score for a reading.
///
/// Three terms of weight 25: moisture and humidity as fractions of 100, and
/// temperature as its offset from 18 °C over an 8 °C span. The weights sum to
/// 75, so the nominal maximum is 75 rather than 100. Nothing is clamped:
/// cold readings go negative and extreme ones exceed the nominal range.
pub fn score(reading: &SensorReading) -> f64 {
    (reading.moisture / 100.0) * TERM_WEIGHT
        + (reading.humidity / 100.0) * TERM_WEIGHT
        + ((reading.temperature - TEMPERATURE_BASE) / TEMPERATURE_SPAN) * TERM_WEIGHT
}

/// Needle rotation in degrees for a score: -90 at 0, 0 at 50, +90 at 100.
///
/// Zero degrees points straight up; negative rotates left.
pub fn needle_angle(score: f64) -> f64 {
    (score / 100.0) * 180.0 - 90.0
}

/// Visual style class for a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Danger,
    Warning,
    Accent,
    Success,
}

/// One of four score ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HealthTier {
    Critical,
    Poor,
    Fair,
    Good,
}

impl HealthTier {
    /// Classify a score. Lower bounds are inclusive: 25 is Poor, 75 is Good.
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            HealthTier::Critical
        } else if score < 50.0 {
            HealthTier::Poor
        } else if score < 75.0 {
            HealthTier::Fair
        } else {
            HealthTier::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthTier::Critical => "Critical Health",
            HealthTier::Poor => "Poor Health",
            HealthTier::Fair => "Fair Health",
            HealthTier::Good => "Good Health",
        }
    }

    pub fn style(&self) -> StatusStyle {
        match self {
            HealthTier::Critical => StatusStyle::Danger,
            HealthTier::Poor => StatusStyle::Warning,
            HealthTier::Fair => StatusStyle::Accent,
            HealthTier::Good => StatusStyle::Success,
        }
    }
}

/// What the status label under the gauge currently says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Tier(HealthTier),
    /// The last poll failed.
    Offline,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Tier(tier) => tier.label(),
            HealthStatus::Offline => "Sensor Offline",
        }
    }

    pub fn style(&self) -> StatusStyle {
        match self {
            HealthStatus::Tier(tier) => tier.style(),
            HealthStatus::Offline => StatusStyle::Danger,
        }
    }
}

/// Gauge view-model: needle angle plus status label.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub score: f64,
    pub angle: f64,
    pub status: HealthStatus,
}

impl Default for Gauge {
    fn default() -> Self {
        Self::new(SEED_SCORE)
    }
}

impl Gauge {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            angle: needle_angle(score),
            status: HealthStatus::Tier(HealthTier::from_score(score)),
        }
    }

    /// Move the needle and relabel for a new score.
    pub fn update(&mut self, score: f64) {
        *self = Self::new(score);
    }

    /// Show the offline label. The needle stays where it was.
    pub fn mark_offline(&mut self) {
        self.status = HealthStatus::Offline;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_score_full_readings_is_75() {
        // The three weighted terms only add up to 75; there is no fourth term.
        let reading = SensorReading::new(100.0, 100.0, 26.0);
        assert_close(score(&reading), 75.0);
    }

    #[test]
    fn test_score_zero_point() {
        let reading = SensorReading::new(0.0, 0.0, 18.0);
        assert_close(score(&reading), 0.0);
    }

    #[test]
    fn test_score_is_not_clamped() {
        let cold = SensorReading::new(0.0, 0.0, 2.0);
        assert_close(score(&cold), -50.0);

        let hot = SensorReading::new(100.0, 100.0, 42.0);
        assert_close(score(&hot), 125.0);
    }

    #[test]
    fn test_score_mixed() {
        let reading = SensorReading::new(40.0, 60.0, 22.0);
        // 10 + 15 + 12.5
        assert_close(score(&reading), 37.5);
    }

    #[test]
    fn test_needle_angle() {
        assert_close(needle_angle(0.0), -90.0);
        assert_close(needle_angle(50.0), 0.0);
        assert_close(needle_angle(100.0), 90.0);
        assert_close(needle_angle(75.0), 45.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(HealthTier::from_score(24.999), HealthTier::Critical);
        assert_eq!(HealthTier::from_score(25.0), HealthTier::Poor);
        assert_eq!(HealthTier::from_score(49.999), HealthTier::Poor);
        assert_eq!(HealthTier::from_score(50.0), HealthTier::Fair);
        assert_eq!(HealthTier::from_score(74.999), HealthTier::Fair);
        assert_eq!(HealthTier::from_score(75.0), HealthTier::Good);
        assert_eq!(HealthTier::from_score(-10.0), HealthTier::Critical);
        assert_eq!(HealthTier::from_score(140.0), HealthTier::Good);
    }

    #[test]
    fn test_tier_labels_and_styles() {
        let table = [
            (10.0, "Critical Health", StatusStyle::Danger),
            (30.0, "Poor Health", StatusStyle::Warning),
            (60.0, "Fair Health", StatusStyle::Accent),
            (80.0, "Good Health", StatusStyle::Success),
        ];
        for (score, label, style) in table {
            let tier = HealthTier::from_score(score);
            assert_eq!(tier.label(), label);
            assert_eq!(tier.style(), style);
        }
    }

    #[test]
    fn test_gauge_seed() {
        let gauge = Gauge::default();
        assert_close(gauge.angle, 45.0);
        assert_eq!(gauge.status.label(), "Good Health");
    }

    #[test]
    fn test_gauge_offline_keeps_needle() {
        let mut gauge = Gauge::default();
        gauge.update(30.0);
        gauge.mark_offline();

        assert_eq!(gauge.status.label(), "Sensor Offline");
        assert_eq!(gauge.status.style(), StatusStyle::Danger);
        assert_close(gauge.angle, needle_angle(30.0));

        gauge.update(60.0);
        assert_eq!(gauge.status, HealthStatus::Tier(HealthTier::Fair));
    }
}
