//! Application state and key handling

use crate::collector::{self, CollectorTransport, FieldMapping};
use crate::config::{BookingConfig, TransportKind};
use crate::controller::{BookingController, FormEvents};
use crate::state::{NotificationKind, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;

const DEMO_MODE_MESSAGE: &str = "Demo mode: bookings are simulated and not sent anywhere.";

/// Main application struct
pub struct App {
    /// Form controller
    pub controller: BookingController,
    /// Transport description for the status bar
    pub transport_label: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from configuration
    pub fn new(config: &BookingConfig) -> Result<Self> {
        let transport = collector::from_config(config)?;
        let mut app = Self::with_transport(config, transport);
        if config.transport == TransportKind::Simulated {
            app.controller
                .notify(NotificationKind::Info, DEMO_MODE_MESSAGE, Instant::now());
        }
        Ok(app)
    }

    /// Create an App around an existing transport
    pub fn with_transport(config: &BookingConfig, transport: Arc<dyn CollectorTransport>) -> Self {
        let transport_label = transport.describe();
        tracing::info!("Using {transport_label}");

        let mapping = FieldMapping::new(config.field_mappings.clone());
        let mut controller = BookingController::new(mapping, transport);
        controller.attach();

        Self {
            controller,
            transport_label,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance animations and collect a finished submission
    pub fn tick(&mut self, now: Instant) {
        self.controller.poll_submission(now);
        self.controller.tick(now);
    }

    /// Whether the loop should redraw at animation speed
    pub fn needs_fast_redraw(&self) -> bool {
        self.controller.is_busy()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.controller.dismiss_notification();
            return Ok(());
        }

        match self.controller.mode() {
            UiMode::FormVisible => self.handle_form_key(key, now),
            UiMode::ThankYouVisible => self.handle_thank_you_key(key, now),
        }
        Ok(())
    }

    /// Handle keys while the booking form is shown
    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let on_submit_control = self.controller.form().is_submit_active();
        let in_multiline = self
            .controller
            .form()
            .fields
            .get(self.controller.form().active_field_index)
            .is_some_and(|f| f.is_multiline);

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.on_submit(now);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.clear_active_field();
            }
            KeyCode::Tab | KeyCode::Down => self.controller.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.controller.focus_prev(),
            KeyCode::Enter if on_submit_control => {
                self.controller.on_submit(now);
            }
            KeyCode::Enter if in_multiline => self.controller.type_char('\n'),
            KeyCode::Enter => self.controller.focus_next(),
            KeyCode::Char(c) if !on_submit_control => self.controller.type_char(c),
            KeyCode::Backspace if !on_submit_control => self.controller.backspace(),
            _ => {}
        }
    }

    /// Handle keys on the thank-you panel
    fn handle_thank_you_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                self.controller.reset(now);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockCollectorTransport;
    use crate::error::SubmissionError;
    use crate::state::{PanelTransition, ADDRESS, FULL_NAME};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(mock: MockCollectorTransport) -> App {
        App::with_transport(&BookingConfig::default(), Arc::new(mock))
    }

    fn mock() -> MockCollectorTransport {
        let mut mock = MockCollectorTransport::new();
        mock.expect_describe()
            .returning(|| "mock collector".to_string());
        mock
    }

    fn type_str(app: &mut App, s: &str, now: Instant) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)), now).unwrap();
        }
    }

    /// Fill every field and leave focus on the submit control
    fn fill_form(app: &mut App, now: Instant) {
        type_str(app, "Asha Rao", now);
        app.handle_key(key(KeyCode::Tab), now).unwrap();
        type_str(app, "9876543210", now);
        app.handle_key(key(KeyCode::Tab), now).unwrap();
        type_str(app, "asha@example.com", now);
        app.handle_key(key(KeyCode::Tab), now).unwrap();
        type_str(app, "12 MG Road", now);
        app.handle_key(key(KeyCode::Enter), now).unwrap();
        type_str(app, "Bengaluru", now);
        app.handle_key(key(KeyCode::Tab), now).unwrap();
    }

    async fn settle(app: &mut App, now: Instant) {
        for _ in 0..100 {
            if !app.controller.is_loading() {
                break;
            }
            tokio::task::yield_now().await;
            app.tick(now);
        }
    }

    #[test]
    fn test_new_app_uses_label_from_transport() {
        let app = app_with(mock());
        assert_eq!(app.transport_label, "mock collector");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_new_from_default_config() {
        let app = App::new(&BookingConfig::default()).unwrap();
        assert!(app.transport_label.starts_with("simulated collector"));
        let info = app.controller.notifications().latest(NotificationKind::Info);
        assert_eq!(info.unwrap().message, DEMO_MODE_MESSAGE);
    }

    #[test]
    fn test_enter_in_address_inserts_newline() {
        let mut app = app_with(mock());
        let now = Instant::now();
        fill_form(&mut app, now);
        assert_eq!(
            app.controller.form().field(ADDRESS).unwrap().value,
            "12 MG Road\nBengaluru"
        );
        assert!(app.controller.form().is_submit_active());
    }

    #[test]
    fn test_enter_in_single_line_field_moves_on() {
        let mut app = app_with(mock());
        let now = Instant::now();
        type_str(&mut app, "Asha", now);
        app.handle_key(key(KeyCode::Enter), now).unwrap();
        assert_eq!(app.controller.form().active_field_index, 1);
        assert_eq!(app.controller.form().field(FULL_NAME).unwrap().value, "Asha");
    }

    #[tokio::test]
    async fn test_submitting_empty_form_shows_error_notification() {
        let mut app = app_with(mock());
        let now = Instant::now();
        app.handle_key(ctrl('s'), now).unwrap();

        assert!(app
            .controller
            .notifications()
            .latest(NotificationKind::Error)
            .is_some());
        assert_eq!(app.controller.mode(), UiMode::FormVisible);

        app.handle_key(key(KeyCode::Esc), now).unwrap();
        assert!(app.controller.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_full_booking_cycle() {
        let mut m = mock();
        m.expect_submit().times(1).returning(|_| Ok(()));
        let mut app = app_with(m);
        let now = Instant::now();

        fill_form(&mut app, now);
        app.handle_key(key(KeyCode::Enter), now).unwrap();
        assert!(app.controller.is_loading());
        assert!(app.needs_fast_redraw());

        settle(&mut app, now).await;
        app.tick(now + PanelTransition::HIDE_DURATION);
        assert_eq!(app.controller.mode(), UiMode::ThankYouVisible);

        app.handle_key(key(KeyCode::Char('n')), now).unwrap();
        assert_eq!(app.controller.mode(), UiMode::FormVisible);
        assert!(app.controller.form().fields.iter().all(|f| f.value.is_empty()));
    }

    #[tokio::test]
    async fn test_failed_booking_stays_on_form() {
        let mut m = mock();
        m.expect_submit()
            .times(1)
            .returning(|_| Err(SubmissionError::Simulated));
        let mut app = app_with(m);
        let now = Instant::now();

        fill_form(&mut app, now);
        app.handle_key(key(KeyCode::Enter), now).unwrap();
        settle(&mut app, now).await;

        assert!(!app.controller.is_loading());
        assert_eq!(app.controller.mode(), UiMode::FormVisible);
        assert_eq!(app.controller.form().field(FULL_NAME).unwrap().value, "Asha Rao");
    }

    #[test]
    fn test_ctrl_u_clears_active_field_and_its_error() {
        let mut app = app_with(mock());
        let now = Instant::now();
        app.handle_key(key(KeyCode::Tab), now).unwrap();
        type_str(&mut app, "98765", now);
        app.handle_key(key(KeyCode::Tab), now).unwrap();
        app.handle_key(key(KeyCode::BackTab), now).unwrap();
        assert!(app.controller.form().fields[1].has_error());

        app.handle_key(ctrl('u'), now).unwrap();

        let mobile = &app.controller.form().fields[1];
        assert!(mobile.value.is_empty());
        assert!(!mobile.has_error());
        assert!(app.controller.form().fields[0].value.is_empty());
    }

    #[test]
    fn test_q_only_quits_from_thank_you() {
        let mut app = app_with(mock());
        app.handle_key(key(KeyCode::Char('q')), Instant::now()).unwrap();
        assert!(!app.should_quit());
        assert_eq!(app.controller.form().field(FULL_NAME).unwrap().value, "q");
    }
}
