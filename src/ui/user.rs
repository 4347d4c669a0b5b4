//! User view: the garden profile.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the User view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let now = Utc::now();
    let profile = &app.profile;

    let chunks = Layout::vertical([
        Constraint::Length(6), // Profile details
        Constraint::Length(3), // Cycle progress
        Constraint::Min(0),
    ])
    .split(area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let remaining = profile.remaining_days(now).to_string();
    let lines = vec![
        Line::from(vec![
            Span::raw(" Crop:           "),
            Span::styled(profile.crop_name.clone(), bold),
        ]),
        Line::from(vec![
            Span::raw(" Planted:        "),
            Span::raw(profile.start_date.format("%Y-%m-%d").to_string()),
        ]),
        Line::from(vec![
            Span::raw(" Growing cycle:  "),
            Span::raw(format!("{} days", profile.total_days)),
        ]),
        Line::from(vec![
            Span::raw(" Days remaining: "),
            Span::styled(remaining, app.theme.header),
        ]),
    ];

    let block = Block::default()
        .title(" Garden Profile ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let details = Paragraph::new(lines).block(block);
    frame.render_widget(details, chunks[0]);

    let progress_block = Block::default()
        .title(" Cycle Progress ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let progress = Gauge::default()
        .block(progress_block)
        .gauge_style(Style::default().fg(app.theme.primary))
        .ratio(profile.progress(now));
    frame.render_widget(progress, chunks[1]);
}
