//! Chat forum view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Render the Chat Forum view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let text = vec![
        Line::styled(" Community Forum", app.theme.header),
        Line::from(""),
        Line::from(" Share tips with other growers, ask about pests and"),
        Line::from(" watering, and compare notes on similar crops."),
        Line::from(""),
        Line::styled(" Press Esc to return to the dashboard.", dim),
    ];

    let block = Block::default()
        .title(" Chat Forum ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let wrap = Wrap { trim: false };
    let paragraph = Paragraph::new(text).block(block).wrap(wrap);
    frame.render_widget(paragraph, area);
}
