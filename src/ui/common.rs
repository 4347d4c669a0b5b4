//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::StatusStyle;

/// Horizontal padding ratatui puts on each side of a tab title.
const TAB_PADDING: u16 = 1;

/// Width of the divider between tabs.
const TAB_DIVIDER: u16 = 1;

/// Title shown for each navigation tab.
fn tab_title(index: usize, view: View) -> String {
    format!("{}:{}", index + 1, view.label())
}

/// Which navigation tab sits under `column` of the tab bar.
///
/// Returns `None` for dividers and the empty space after the last tab.
pub fn tab_at(column: u16) -> Option<View> {
    let mut x = 0u16;
    for (i, view) in View::NAV.iter().enumerate() {
        let width = TAB_PADDING * 2 + tab_title(i, *view).chars().count() as u16;
        if column >= x && column < x + width {
            return Some(*view);
        }
        x += width + TAB_DIVIDER;
    }
    None
}

/// Render the header bar with the overall plant status and shortcut buttons.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.dashboard.gauge.status;
    let status_style = app.theme.status_style(status.style());
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let connection = match app.online {
        None => Span::styled("connecting", Style::default().add_modifier(Modifier::DIM)),
        Some(true) => Span::styled("online", Style::default().fg(app.theme.success)),
        Some(false) => Span::styled("offline", app.theme.status_style(StatusStyle::Danger)),
    };
    let updated = format!(" │ Updated {} │ ", app.dashboard.last_update_text());

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("GARDEN DOCTOR ", bold),
        Span::raw("│ "),
        Span::styled(status.label(), status_style),
        Span::raw(" │ "),
        connection,
        Span::raw(updated),
        Span::styled("[a]", app.theme.header),
        Span::raw(" Alerts "),
        Span::styled("[u]", app.theme.header),
        Span::raw(" User "),
        Span::styled("[f]", app.theme.header),
        Span::raw(" Forum"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing the navigation views.
///
/// Highlights the active view; no tab is highlighted when the visible view
/// has no tab (chat forum) or nothing is visible.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::NAV
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(tab_title(i, *view)))
        .collect();

    let inactive = app.theme.tab_inactive;
    let mut tabs = Tabs::new(titles).style(inactive).divider("|");
    tabs = match app.active_tab() {
        Some(index) => tabs.select(index).highlight_style(app.theme.tab_active),
        // Keep the default first-tab selection invisible
        None => tabs.highlight_style(app.theme.tab_inactive),
    };

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows the data source and available controls, or a temporary message.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let style = Style::default().fg(app.theme.primary);
        let paragraph = Paragraph::new(format!(" {} ", msg)).style(style);
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = match app.current_view {
        Some(View::Settings) => "↑↓:select +/-:adjust Enter:save Esc:back ?:help q:quit",
        Some(_) => "1-4:views a:alerts u:user f:forum r:refresh ?:help q:quit",
        None => "Esc:dashboard ?:help q:quit",
    };

    let status = format!(" {} | {}", app.source_description(), controls);
    let dim = Style::default().add_modifier(Modifier::DIM);
    let paragraph = Paragraph::new(status).style(dim);

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(" Navigation", bold)]),
        Line::from("  1-4         Dashboard/Alerts/User/Settings"),
        Line::from("  a u f       Alerts, User, Chat forum"),
        Line::from("  ←/→ Tab     Cycle views"),
        Line::from("  Esc         Back to dashboard"),
        Line::from(""),
        Line::from(vec![Span::styled(" Settings", bold)]),
        Line::from("  ↑/↓ j/k     Select field"),
        Line::from("  + / -       Adjust value"),
        Line::from("  Enter       Save"),
        Line::from("  x           Discard edits"),
        Line::from(""),
        Line::from(vec![Span::styled(" General", bold)]),
        Line::from("  r           Apply pending readings"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled("Press any key to close", dim)]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.primary));

    let paragraph = Paragraph::new(help_text).block(block);

    let help_width = 48u16.min(area.width.saturating_sub(4));
    let help_height = 23u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_at_columns() {
        // " 1:Dashboard " is 13 wide, then a divider at column 13
        assert_eq!(tab_at(0), Some(View::Dashboard));
        assert_eq!(tab_at(12), Some(View::Dashboard));
        assert_eq!(tab_at(13), None);
        assert_eq!(tab_at(14), Some(View::Alerts));
        // " 2:Alerts " spans 14..24, divider at 24, " 3:User " spans 25..33
        assert_eq!(tab_at(25), Some(View::User));
        assert_eq!(tab_at(34), Some(View::Settings));
        assert_eq!(tab_at(200), None);
    }
}
