//! Settings view: optimum conditions editor.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, SettingsField};

const SAVE_HINT: &str = " Edits apply to advisories when saved; nothing is written to disk.";

/// Render the Settings view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Min(4),    // Editor
        Constraint::Length(1), // Hint
    ])
    .split(area);

    let form = &app.settings_form;
    let header = Row::new(vec![
        Cell::from("Setting"),
        Cell::from("Value"),
        Cell::from("Saved"),
    ])
    .style(app.theme.header);

    let changed = Style::default()
        .fg(app.theme.warning)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<Row> = SettingsField::ALL
        .iter()
        .map(|field| {
            let draft = field.get(&form.draft);
            let saved = field.get(&app.optimum);
            let value_style = if draft != saved {
                changed
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(field.label()),
                Cell::from(format!("{:.1}", draft)).style(value_style),
                Cell::from(format!("{:.1}", saved)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(3), // Setting
        Constraint::Fill(1), // Value
        Constraint::Fill(1), // Saved
    ];
    let block = Block::default()
        .title(" Optimum Conditions ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(form.selected));
    frame.render_stateful_widget(table, chunks[0], &mut state);

    let dim = Style::default().add_modifier(Modifier::DIM);
    let hint = Paragraph::new(SAVE_HINT).style(dim);
    frame.render_widget(hint, chunks[1]);
}
