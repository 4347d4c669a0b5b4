use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, View};
use crate::ui::common::tab_at;
use crate::ui::TAB_ROW;

/// Step applied by one +/- press in the settings editor.
const ADJUST_STEP: f64 = 1.0;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.is_visible(View::Settings) && handle_settings_key(app, key) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Tab bar
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as u8 - b'1') as usize;
            app.set_view(View::NAV[index]);
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),

        // Header shortcuts
        KeyCode::Char('a') => app.show_view("alertsView"),
        KeyCode::Char('u') => app.show_view("userView"),
        KeyCode::Char('f') => app.show_view("chatForumView"),

        KeyCode::Esc | KeyCode::Backspace => app.go_back(),

        KeyCode::Char('r') => {
            let applied = app.reload_data();
            if applied == 0 {
                app.set_status_message("No new readings".to_string());
            }
        }

        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

/// Keys owned by the settings editor. Returns `true` when consumed.
fn handle_settings_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.settings_form.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.settings_form.select_next(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.settings_form.adjust(ADJUST_STEP),
        KeyCode::Char('-') => app.settings_form.adjust(-ADJUST_STEP),
        KeyCode::Enter => app.save_settings(),
        KeyCode::Char('x') => app.reset_settings(),
        _ => return false,
    }
    true
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if mouse.row == TAB_ROW => {
            if let Some(view) = tab_at(mouse.column) {
                app.set_view(view);
            }
        }

        // Right-click goes back
        MouseEventKind::Down(MouseButton::Right) => app.go_back(),

        MouseEventKind::ScrollUp if app.is_visible(View::Settings) => {
            app.settings_form.select_prev();
        }
        MouseEventKind::ScrollDown if app.is_visible(View::Settings) => {
            app.settings_form.select_next();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GardenProfile, OptimumConditions};
    use crate::source::{ChannelSource, PollOutcome, SensorReading};
    use chrono::{TimeZone, Utc};
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn test_app() -> (tokio::sync::watch::Sender<Option<PollOutcome>>, App) {
        let (tx, source) = ChannelSource::create("test");
        let profile = GardenProfile {
            crop_name: "onions".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 11, 28, 0, 0, 0).unwrap(),
            total_days: 30,
        };
        let app = App::new(Box::new(source), OptimumConditions::default(), profile);
        (tx, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_number_keys_select_tabs() {
        let (_tx, mut app) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.current_view, Some(View::Alerts));
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.current_view, Some(View::Settings));
        handle_key_event(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.current_view, Some(View::Dashboard));
    }

    #[test]
    fn test_header_shortcuts() {
        let (_tx, mut app) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.current_view, Some(View::ChatForum));
        assert_eq!(app.active_tab(), None);
        handle_key_event(&mut app, key(KeyCode::Char('u')));
        assert_eq!(app.current_view, Some(View::User));
        handle_key_event(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.current_view, Some(View::Alerts));
        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.current_view, Some(View::Dashboard));
    }

    #[test]
    fn test_help_swallows_next_key() {
        let (_tx, mut app) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_quit_keys() {
        let (_tx, mut app) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.running);

        let (_tx, mut app) = test_app();
        handle_key_event(
            &mut app,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
        assert!(!app.running);
    }

    #[test]
    fn test_settings_keys_edit_and_save() {
        let (_tx, mut app) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('4')));

        // Temperature is the first field
        handle_key_event(&mut app, key(KeyCode::Char('+')));
        handle_key_event(&mut app, key(KeyCode::Char('+')));
        assert_eq!(app.settings_form.draft.temperature, 27.0);
        assert_eq!(app.optimum.temperature, 25.0);

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.optimum.temperature, 27.0);
        let message = app.get_status_message();
        assert_eq!(message, Some("Settings saved successfully!"));
    }

    #[test]
    fn test_settings_discard() {
        let (_tx, mut app) = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Char('-')));
        assert_eq!(app.settings_form.draft.humidity, 64.0);

        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.settings_form.draft.humidity, 65.0);
        // Still on settings
        assert!(app.is_visible(View::Settings));
    }

    #[test]
    fn test_reload_key_drains_source() {
        let (tx, mut app) = test_app();
        let reading = SensorReading::new(40.0, 65.0, 25.0);
        tx.send(Some(Ok(reading))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.online, Some(true));

        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.get_status_message(), Some("No new readings"));
    }

    #[test]
    fn test_tab_click() {
        let (_tx, mut app) = test_app();
        handle_mouse_event(&mut app, click(MouseButton::Left, 15, TAB_ROW));
        assert_eq!(app.current_view, Some(View::Alerts));

        // Clicks on other rows do not switch tabs
        handle_mouse_event(&mut app, click(MouseButton::Left, 0, 5));
        assert_eq!(app.current_view, Some(View::Alerts));

        handle_mouse_event(&mut app, click(MouseButton::Right, 0, 5));
        assert_eq!(app.current_view, Some(View::Dashboard));
    }
}
