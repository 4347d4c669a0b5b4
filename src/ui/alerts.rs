//! Alerts view rendering.
//!
//! Top: advisories for the latest reading. Bottom: sensor connectivity log,
//! newest first.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::StatusStyle;

/// Render the Alerts view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let advisory_rows = app.advisories.len().max(1) as u16 + 2;
    let chunks = Layout::vertical([
        Constraint::Length(advisory_rows), // Advisories
        Constraint::Min(3),                // Event log
    ])
    .split(area);

    render_advisories(frame, app, chunks[0]);
    render_log(frame, app, chunks[1]);
}

fn render_advisories(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Growing Conditions ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if app.advisories.is_empty() {
        let waiting = Paragraph::new(" Waiting for the first reading...")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(waiting, area);
        return;
    }

    let items: Vec<ListItem> = app
        .advisories
        .iter()
        .map(|advisory| {
            let (marker, style) = if advisory.is_actionable() {
                ("▲", app.theme.status_style(StatusStyle::Warning))
            } else {
                ("✓", app.theme.status_style(StatusStyle::Success))
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::raw(advisory.message()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Sensor Events ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if app.alert_log.is_empty() {
        let empty = Paragraph::new(" No sensor events")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .alert_log
        .iter()
        .map(|event| {
            let style = if event.offline {
                app.theme.status_style(StatusStyle::Danger)
            } else {
                app.theme.status_style(StatusStyle::Success)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", event.at.format("%H:%M:%S")), style),
                Span::raw(event.message.clone()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
