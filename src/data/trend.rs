//! Static weekly trend chart.
//!
//! The chart is fixed sample data; it is not derived from live readings.

/// Day label and health percentage for each bar, Monday first.
pub const WEEKLY_TREND: [(&str, u8); 7] = [
    ("Mon", 65),
    ("Tue", 59),
    ("Wed", 80),
    ("Thu", 72),
    ("Fri", 56),
    ("Sat", 55),
    ("Sun", 75),
];

/// Height of a 100% bar in chart units.
pub const CHART_HEIGHT: f64 = 200.0;

/// One bar of the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBar {
    pub day: &'static str,
    pub value: u8,
    /// `value / 100 * CHART_HEIGHT`
    pub height: f64,
}

impl TrendBar {
    pub fn value_label(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Bars currently laid out for the chart.
#[derive(Debug, Clone, Default)]
pub struct TrendChart {
    bars: Vec<TrendBar>,
}

impl TrendChart {
    /// Create a chart with its bars already laid out.
    pub fn new() -> Self {
        let mut chart = Self::default();
        chart.render();
        chart
    }

    /// Clear and rebuild the bars. Safe to call any number of times.
    pub fn render(&mut self) {
        self.bars.clear();
        let bars = WEEKLY_TREND.iter().map(|&(day, value)| TrendBar {
            day,
            value,
            height: f64::from(value) / 100.0 * CHART_HEIGHT,
        });
        self.bars.extend(bars);
    }

    pub fn bars(&self) -> &[TrendBar] {
        &self.bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_idempotent() {
        let mut chart = TrendChart::default();
        chart.render();
        chart.render();
        assert_eq!(chart.bars().len(), 7);
    }

    #[test]
    fn test_bar_heights() {
        let chart = TrendChart::new();
        let expected = [130.0, 118.0, 160.0, 144.0, 112.0, 110.0, 150.0];
        for (bar, want) in chart.bars().iter().zip(expected) {
            assert!((bar.height - want).abs() < 1e-9, "{}", bar.day);
        }
    }

    #[test]
    fn test_labels() {
        let chart = TrendChart::new();
        let first = &chart.bars()[0];
        assert_eq!(first.day, "Mon");
        assert_eq!(first.value_label(), "65%");
        assert_eq!(chart.bars()[6].day, "Sun");
    }
}
