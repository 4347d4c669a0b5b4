//! Terminal UI rendering using ratatui.
//!
//! Each view lives in its own submodule with a `render` function; [`draw`]
//! lays out a full frame and dispatches to the routed view.
//!
//! ## Submodules
//!
//! - [`dashboard`]: Sensor bars, the health dial, and the weekly trend chart
//! - [`alerts`]: Growing-condition advisories and the sensor connectivity log
//! - [`user`]: Garden profile with days remaining in the growing cycle
//! - [`settings`]: Editor for the optimum conditions used by the advisor
//! - [`forum`]: Community panel reached from the header shortcut
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ View Content                         │
//! │ (dashboard/alerts/user/...::render)  │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod alerts;
pub mod common;
pub mod dashboard;
pub mod forum;
pub mod settings;
pub mod theme;
pub mod user;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

pub use theme::Theme;

/// Minimum terminal width for a usable display.
pub const MIN_WIDTH: u16 = 60;

/// Minimum terminal height for a usable display.
pub const MIN_HEIGHT: u16 = 16;

/// Row of the tab bar, used for mouse hit testing.
pub const TAB_ROW: u16 = 1;

/// Draw one full frame for `app`.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let top = (area.height / 2).saturating_sub(2);
        let centered = Rect::new(0, top, area.width, 5.min(area.height - top));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(1), // Tabs
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    common::render_tabs(frame, app, chunks[1]);

    // Nothing routed leaves the content area blank
    match app.current_view {
        Some(View::Dashboard) => dashboard::render(frame, app, chunks[2]),
        Some(View::Alerts) => alerts::render(frame, app, chunks[2]),
        Some(View::User) => user::render(frame, app, chunks[2]),
        Some(View::Settings) => settings::render(frame, app, chunks[2]),
        Some(View::ChatForum) => forum::render(frame, app, chunks[2]),
        None => {}
    }

    common::render_status_bar(frame, app, chunks[3]);

    if app.show_help {
        common::render_help(frame, app, area);
    }
}
