//! Garden profile: what is growing and for how long.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Crop and growing schedule for the monitored garden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenProfile {
    pub crop_name: String,
    /// When the current crop was planted.
    pub start_date: DateTime<Utc>,
    /// Length of the growing cycle in days.
    pub total_days: i64,
}

impl GardenProfile {
    /// Whole days left in the growing cycle at `now`, never negative.
    pub fn remaining_days(&self, now: DateTime<Utc>) -> i64 {
        let elapsed = (now - self.start_date).num_days();
        (self.total_days - elapsed).max(0)
    }

    /// Fraction of the cycle completed, in [0, 1].
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        if self.total_days <= 0 {
            return 1.0;
        }
        let done = self.total_days - self.remaining_days(now);
        (done as f64 / self.total_days as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn onions() -> GardenProfile {
        GardenProfile {
            crop_name: "onions".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 11, 28, 0, 0, 0).unwrap(),
            total_days: 30,
        }
    }

    #[test]
    fn test_remaining_days() {
        let profile = onions();
        let now = Utc.with_ymd_and_hms(2025, 12, 8, 12, 0, 0).unwrap();
        assert_eq!(profile.remaining_days(now), 20);
    }

    #[test]
    fn test_remaining_days_never_negative() {
        let profile = onions();
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(profile.remaining_days(now), 0);
        assert_eq!(profile.progress(now), 1.0);
    }

    #[test]
    fn test_before_start_date() {
        let profile = onions();
        let now = Utc.with_ymd_and_hms(2025, 11, 1, 0, 0, 0).unwrap();
        // Cycle has not begun; more days remain than the cycle length
        assert_eq!(profile.remaining_days(now), 57);
        assert_eq!(profile.progress(now), 0.0);
    }

    #[test]
    fn test_deserialize_rfc3339() {
        let profile: GardenProfile = serde_json::from_str(
            r#"{"crop_name":"basil","start_date":"2026-03-01T00:00:00Z","total_days":60}"#,
        )
        .unwrap();
        assert_eq!(profile.crop_name, "basil");
        assert_eq!(profile.total_days, 60);
    }
}
