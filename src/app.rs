//! Application state and navigation logic.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::data::{advise, Advisory, Dashboard, GardenProfile, OptimumConditions};
use crate::source::{DataSource, PollOutcome};
use crate::ui::Theme;

/// Maximum number of entries kept in the alert log.
const MAX_ALERT_LOG: usize = 50;

/// How long transient status messages stay visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// One top-level panel. Exactly one is visible after navigating to a known id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Sensor bars, health gauge and weekly trend.
    Dashboard,
    /// Advisories for the latest reading and the sensor event log.
    Alerts,
    /// Garden profile.
    User,
    /// Optimum conditions editor.
    Settings,
    /// Community forum panel.
    ChatForum,
}

impl View {
    /// Every view, in cycling order.
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Alerts,
        View::User,
        View::Settings,
        View::ChatForum,
    ];

    /// Views that have a button in the tab bar, left to right.
    pub const NAV: [View; 4] = [View::Dashboard, View::Alerts, View::User, View::Settings];

    /// Stable identifier used for routing.
    pub fn id(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboardView",
            View::Alerts => "alertsView",
            View::User => "userView",
            View::Settings => "settingsView",
            View::ChatForum => "chatForumView",
        }
    }

    /// Look up a view by identifier.
    pub fn from_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.id() == id)
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Alerts => "Alerts",
            View::User => "User",
            View::Settings => "Settings",
            View::ChatForum => "Chat Forum",
        }
    }

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        let i = View::ALL.iter().position(|v| *v == self).unwrap_or(0);
        View::ALL[(i + 1) % View::ALL.len()]
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        let i = View::ALL.iter().position(|v| *v == self).unwrap_or(0);
        View::ALL[(i + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Fields of the settings editor, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Temperature,
    Humidity,
    Moisture,
    Tolerance,
}

impl SettingsField {
    pub const ALL: [SettingsField; 4] = [
        SettingsField::Temperature,
        SettingsField::Humidity,
        SettingsField::Moisture,
        SettingsField::Tolerance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Temperature => "Optimum temperature (°C)",
            SettingsField::Humidity => "Optimum humidity (%)",
            SettingsField::Moisture => "Optimum soil moisture (%)",
            SettingsField::Tolerance => "Tolerance (±)",
        }
    }

    pub fn get(&self, optimum: &OptimumConditions) -> f64 {
        match self {
            SettingsField::Temperature => optimum.temperature,
            SettingsField::Humidity => optimum.humidity,
            SettingsField::Moisture => optimum.moisture,
            SettingsField::Tolerance => optimum.tolerance,
        }
    }

    fn get_mut<'a>(&self, optimum: &'a mut OptimumConditions) -> &'a mut f64 {
        match self {
            SettingsField::Temperature => &mut optimum.temperature,
            SettingsField::Humidity => &mut optimum.humidity,
            SettingsField::Moisture => &mut optimum.moisture,
            SettingsField::Tolerance => &mut optimum.tolerance,
        }
    }
}

/// Unsaved edits in the settings view.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub draft: OptimumConditions,
    pub selected: usize,
}

impl SettingsForm {
    fn new(optimum: OptimumConditions) -> Self {
        Self {
            draft: optimum,
            selected: 0,
        }
    }

    pub fn selected_field(&self) -> SettingsField {
        SettingsField::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(SettingsField::ALL.len() - 1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Nudge the selected field. Tolerance never goes below zero.
    pub fn adjust(&mut self, delta: f64) {
        let field = self.selected_field();
        let value = field.get_mut(&mut self.draft);
        *value += delta;
        if field == SettingsField::Tolerance && *value < 0.0 {
            *value = 0.0;
        }
    }
}

/// Sensor connectivity transition recorded in the alert log.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub at: DateTime<Local>,
    pub message: String,
    pub offline: bool,
}

/// Main application state.
pub struct App {
    pub running: bool,
    /// Visible view; `None` after routing to an unknown id.
    pub current_view: Option<View>,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub dashboard: Dashboard,
    /// `None` until the first outcome arrives.
    pub online: Option<bool>,

    // Alerts
    pub optimum: OptimumConditions,
    pub advisories: Vec<Advisory>,
    pub alert_log: VecDeque<AlertEvent>,

    // User / settings
    pub profile: GardenProfile,
    pub settings_form: SettingsForm,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App reading from `source`. Starts on the dashboard.
    pub fn new(
        source: Box<dyn DataSource>,
        optimum: OptimumConditions,
        profile: GardenProfile,
    ) -> Self {
        Self {
            running: true,
            current_view: Some(View::Dashboard),
            show_help: false,
            source,
            dashboard: Dashboard::new(Local::now()),
            online: None,
            optimum,
            advisories: Vec::new(),
            alert_log: VecDeque::new(),
            profile,
            settings_form: SettingsForm::new(optimum),
            theme: Theme::dark(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, time)) if time.elapsed() < STATUS_MESSAGE_TTL => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Route to the view named `id`.
    ///
    /// All views are hidden first; an unknown id leaves nothing visible.
    pub fn show_view(&mut self, id: &str) {
        self.current_view = View::from_id(id);
        debug!(target: "ui", view = id, visible = self.current_view.is_some(), "Show view");
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.show_view(view.id());
    }

    /// Whether `view` is the one being drawn.
    pub fn is_visible(&self, view: View) -> bool {
        self.current_view == Some(view)
    }

    /// Index into [`View::NAV`] of the tab drawn as active, if any.
    pub fn active_tab(&self) -> Option<usize> {
        let current = self.current_view?;
        View::NAV.iter().position(|v| *v == current)
    }

    /// Switch to the next view (cycles through every view).
    pub fn next_view(&mut self) {
        let next = self.current_view.map_or(View::Dashboard, View::next);
        self.set_view(next);
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        let prev = self.current_view.map_or(View::Dashboard, View::prev);
        self.set_view(prev);
    }

    /// Navigate back to the dashboard.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        self.set_view(View::Dashboard);
    }

    /// Drain every finished outcome from the source.
    ///
    /// Returns how many outcomes were applied.
    pub fn reload_data(&mut self) -> usize {
        let mut applied = 0;
        while let Some(outcome) = self.source.poll() {
            self.apply_outcome(outcome);
            applied += 1;
        }
        applied
    }

    /// Render one poll outcome into the view-models.
    ///
    /// A failure only flips the status to offline; the last values stay.
    pub fn apply_outcome(&mut self, outcome: PollOutcome) {
        let now = Local::now();
        match outcome {
            Ok(reading) => {
                debug!(
                    target: "sensor",
                    moisture = reading.moisture,
                    humidity = reading.humidity,
                    temperature = reading.temperature,
                    "Reading received"
                );
                self.dashboard.apply_reading(reading, now);
                self.advisories = advise(&reading, &self.optimum);
                if self.online == Some(false) {
                    info!(target: "sensor", "Sensor back online");
                    self.push_alert(now, "Sensor back online".to_string(), false);
                }
                self.online = Some(true);
            }
            Err(e) => {
                warn!(target: "sensor", error = %e, "Error fetching sensor data");
                self.dashboard.mark_offline();
                if self.online != Some(false) {
                    self.push_alert(now, format!("Sensor offline: {}", e), true);
                }
                self.online = Some(false);
            }
        }
    }

    fn push_alert(&mut self, at: DateTime<Local>, message: String, offline: bool) {
        self.alert_log.push_front(AlertEvent {
            at,
            message,
            offline,
        });
        self.alert_log.truncate(MAX_ALERT_LOG);
    }

    /// Apply the settings draft to the live advisor.
    pub fn save_settings(&mut self) {
        self.optimum = self.settings_form.draft;
        if let Some(reading) = self.dashboard.reading {
            self.advisories = advise(&reading, &self.optimum);
        }
        info!(target: "ui", optimum = ?self.optimum, "Settings saved");
        self.set_status_message("Settings saved successfully!".to_string());
    }

    /// Drop unsaved edits.
    pub fn reset_settings(&mut self) {
        self.settings_form.draft = self.optimum;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::HealthStatus;
    use crate::source::{ChannelSource, FetchError, SensorReading};
    use chrono::{TimeZone, Utc};

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

    /// Every view other than `view` is hidden, and only its tab is active.
    fn assert_only(app: &App, view: View) {
        for v in View::ALL {
            assert_eq!(app.is_visible(v), v == view, "{:?}", v);
        }
        let expected_tab = View::NAV.iter().position(|v| *v == view);
        assert_eq!(app.active_tab(), expected_tab);
    }

    #[test]
    fn test_starts_on_dashboard() {
        let (_tx, app) = test_app();
        assert_only(&app, View::Dashboard);
        assert_eq!(app.dashboard.gauge.status.label(), "Good Health");
    }

    #[test]
    fn test_show_view_switches_exactly_one() {
        let (_tx, mut app) = test_app();
        app.show_view("dashboardView");
        app.show_view("alertsView");
        assert_only(&app, View::Alerts);
        assert_eq!(app.active_tab(), Some(1));
    }

    #[test]
    fn test_show_view_forum_has_no_tab() {
        let (_tx, mut app) = test_app();
        app.show_view("chatForumView");
        assert_only(&app, View::ChatForum);
        assert_eq!(app.active_tab(), None);
    }

    #[test]
    fn test_show_view_unknown_hides_everything() {
        let (_tx, mut app) = test_app();
        app.show_view("gardenView");
        assert!(app.current_view.is_none());
        assert!(View::ALL.iter().all(|v| !app.is_visible(*v)));
        assert_eq!(app.active_tab(), None);

        // Navigation recovers from the blank state
        app.next_view();
        assert_only(&app, View::Dashboard);
    }

    #[test]
    fn test_view_ids_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), Some(view));
        }
    }

    #[test]
    fn test_view_cycling() {
        assert_eq!(View::Settings.next(), View::ChatForum);
        assert_eq!(View::ChatForum.next(), View::Dashboard);
        assert_eq!(View::Dashboard.prev(), View::ChatForum);
    }

    #[test]
    fn test_reading_updates_dashboard_and_advisories() {
        let (tx, mut app) = test_app();
        let reading = SensorReading::new(100.0, 100.0, 26.0);
        tx.send(Some(Ok(reading))).unwrap();

        assert_eq!(app.reload_data(), 1);
        assert_eq!(app.online, Some(true));
        assert!((app.dashboard.gauge.score - 75.0).abs() < 1e-9);
        assert_eq!(app.dashboard.gauge.status.label(), "Good Health");
        assert_eq!(
            app.advisories,
            vec![Advisory::MoistureHigh, Advisory::HumidityHigh]
        );
    }

    #[test]
    fn test_failure_sets_offline_and_keeps_values() {
        let (_tx, mut app) = test_app();
        app.apply_outcome(Ok(SensorReading::new(40.0, 65.0, 25.0)));
        app.apply_outcome(Err(FetchError::Network("connection refused".to_string())));

        assert_eq!(app.dashboard.gauge.status, HealthStatus::Offline);
        assert_eq!(app.dashboard.gauge.status.label(), "Sensor Offline");
        assert_eq!(app.dashboard.sensor_bars()[0].text, "40%");
        assert_eq!(app.online, Some(false));
        assert!(app.running);
    }

    #[test]
    fn test_failure_then_success_recovers() {
        let (_tx, mut app) = test_app();
        app.apply_outcome(Err(FetchError::Status(502)));
        app.apply_outcome(Err(FetchError::Status(502)));
        app.apply_outcome(Ok(SensorReading::new(40.0, 65.0, 25.0)));

        // 10 + 16.25 + 21.875
        assert_eq!(app.dashboard.gauge.status.label(), "Poor Health");

        // One offline transition and one recovery, newest first
        assert_eq!(app.alert_log.len(), 2);
        assert!(!app.alert_log[0].offline);
        assert!(app.alert_log[1].offline);
        assert!(app.alert_log[1].message.contains("502"));
    }

    #[test]
    fn test_alert_log_is_bounded() {
        let (_tx, mut app) = test_app();
        for _ in 0..100 {
            app.apply_outcome(Err(FetchError::Status(500)));
            app.apply_outcome(Ok(SensorReading::new(40.0, 65.0, 25.0)));
        }
        assert_eq!(app.alert_log.len(), MAX_ALERT_LOG);
    }

    #[test]
    fn test_save_settings_reapplies_advisories() {
        let (_tx, mut app) = test_app();
        app.apply_outcome(Ok(SensorReading::new(50.0, 65.0, 25.0)));
        assert_eq!(app.advisories, vec![Advisory::MoistureHigh]);

        // Raise optimum moisture from 40 to 50
        app.settings_form.select_next();
        app.settings_form.select_next();
        assert_eq!(app.settings_form.selected_field(), SettingsField::Moisture);
        for _ in 0..10 {
            app.settings_form.adjust(1.0);
        }
        // Not applied until saved
        assert_eq!(app.optimum.moisture, 40.0);

        app.save_settings();
        assert_eq!(app.optimum.moisture, 50.0);
        assert_eq!(app.advisories, vec![Advisory::WithinRange]);
        let message = app.get_status_message();
        assert_eq!(message, Some("Settings saved successfully!"));
    }

    #[test]
    fn test_tolerance_never_negative() {
        let (_tx, mut app) = test_app();
        app.settings_form.selected = 3;
        for _ in 0..5 {
            app.settings_form.adjust(-1.0);
        }
        assert_eq!(app.settings_form.draft.tolerance, 0.0);

        app.reset_settings();
        assert_eq!(app.settings_form.draft.tolerance, 3.0);
    }
}
