//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::StatusStyle;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary color for highlights and active elements.
    pub primary: Color,
    /// Critical health, offline sensor.
    pub danger: Color,
    /// Poor health.
    pub warning: Color,
    /// Fair health.
    pub accent: Color,
    /// Good health.
    pub success: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Fill color for the weekly trend bars.
    pub chart: Color,
    /// Style for section headings.
    pub header: Style,
    /// Style for the selected row in editable lists.
    pub selected: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            primary: Color::Green,
            danger: Color::Red,
            warning: Color::Yellow,
            accent: Color::Cyan,
            success: Color::Green,
            border: Color::Gray,
            chart: Color::LightGreen,
            header: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            primary: Color::Green,
            danger: Color::Red,
            warning: Color::Rgb(180, 120, 0),
            accent: Color::Blue,
            success: Color::Green,
            border: Color::DarkGray,
            chart: Color::Green,
            header: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            tab_active: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Foreground color for a status style class.
    pub fn color(&self, style: StatusStyle) -> Color {
        match style {
            StatusStyle::Danger => self.danger,
            StatusStyle::Warning => self.warning,
            StatusStyle::Accent => self.accent,
            StatusStyle::Success => self.success,
        }
    }

    /// Text style for a status label.
    pub fn status_style(&self, style: StatusStyle) -> Style {
        let base = Style::default().fg(self.color(style));
        match style {
            StatusStyle::Danger => base.add_modifier(Modifier::BOLD),
            _ => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_status_has_distinct_color() {
        let theme = Theme::dark();
        let colors = [
            theme.color(StatusStyle::Danger),
            theme.color(StatusStyle::Warning),
            theme.color(StatusStyle::Accent),
            theme.color(StatusStyle::Success),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_danger_is_bold() {
        let theme = Theme::light();
        let style = theme.status_style(StatusStyle::Danger);
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }
}
