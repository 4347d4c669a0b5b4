//! Dashboard view rendering.
//!
//! Three sensor progress bars across the top, the health dial bottom left,
//! and the weekly trend chart bottom right.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph,
    },
    Frame,
};

use crate::app::App;
use crate::data::health::needle_angle;
use crate::data::trend::CHART_HEIGHT;
use crate::data::{HealthTier, SensorBar, StatusStyle};
use crate::ui::Theme;

/// Needle length relative to the dial radius.
const NEEDLE_LENGTH: f64 = 0.85;

/// Score step between dots on the dial arc.
const ARC_STEP: f64 = 0.5;

/// Render the Dashboard view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Sensor bars
        Constraint::Min(8),    // Dial and trend
    ])
    .split(area);
    render_sensor_bars(frame, app, chunks[0]);

    let lower = Layout::horizontal([
        Constraint::Percentage(40), // Health dial
        Constraint::Percentage(60), // Weekly trend
    ])
    .split(chunks[1]);
    render_health_dial(frame, app, lower[0]);
    render_trend(frame, app, lower[1]);
}

fn render_sensor_bars(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (bar, column) in app.dashboard.sensor_bars().iter().zip(columns.iter()) {
        frame.render_widget(sensor_gauge(bar, &app.theme), *column);
    }
}

fn sensor_gauge<'a>(bar: &SensorBar, theme: &Theme) -> Gauge<'a> {
    let block = Block::default()
        .title(format!(" {} ", bar.label))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));
    let bold = Style::default().add_modifier(Modifier::BOLD);

    Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(theme.primary))
        .ratio(bar.ratio())
        .label(Span::styled(bar.text.clone(), bold))
}

/// Dots along the dial arc, grouped by the tier each stretch of arc represents.
fn arc_segments() -> [(StatusStyle, Vec<(f64, f64)>); 4] {
    let mut segments = [
        (StatusStyle::Danger, Vec::new()),
        (StatusStyle::Warning, Vec::new()),
        (StatusStyle::Accent, Vec::new()),
        (StatusStyle::Success, Vec::new()),
    ];

    let steps = (100.0 / ARC_STEP) as usize;
    for i in 0..=steps {
        let score = i as f64 * ARC_STEP;
        let point = needle_tip(needle_angle(score), 1.0);
        let index = match HealthTier::from_score(score) {
            HealthTier::Critical => 0,
            HealthTier::Poor => 1,
            HealthTier::Fair => 2,
            HealthTier::Good => 3,
        };
        segments[index].1.push(point);
    }

    segments
}

/// End point of a needle rotated `angle` degrees from vertical.
fn needle_tip(angle: f64, length: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (length * radians.sin(), length * radians.cos())
}

fn render_health_dial(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Plant Health ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Min(3),    // Dial
        Constraint::Length(1), // Status label
    ])
    .split(inner);

    let gauge = &app.dashboard.gauge;
    let status_style = app.theme.status_style(gauge.status.style());
    let needle_color = status_style.fg.unwrap_or(Color::White);
    let (tip_x, tip_y) = needle_tip(gauge.angle, NEEDLE_LENGTH);
    let segments = arc_segments();
    let theme = &app.theme;

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.1, 1.1])
        .y_bounds([-0.1, 1.1])
        .paint(move |ctx| {
            for (style, coords) in &segments {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: theme.color(*style),
                });
            }
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: tip_x,
                y2: tip_y,
                color: needle_color,
            });
        });
    frame.render_widget(canvas, rows[0]);

    let label = Line::from(vec![
        Span::styled(gauge.status.label(), status_style),
        Span::raw(format!("  ({:.0})", gauge.score)),
    ]);
    let label = Paragraph::new(label).alignment(Alignment::Center);
    frame.render_widget(label, rows[1]);
}

fn render_trend(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Weekly Health Trend ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let bars: Vec<Bar> = app
        .dashboard
        .trend
        .bars()
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar.height.round() as u64)
                .text_value(bar.value_label())
                .label(Line::from(bar.day))
                .style(Style::default().fg(app.theme.chart))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(2)
        .max(CHART_HEIGHT as u64)
        .value_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(chart, area);
}
