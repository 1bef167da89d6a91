//! Booking form controller
//!
//! Owns the form, the panel state machine, and the notification stack, and
//! drives one submission at a time through a [`CollectorTransport`].

use super::subscription::{EventKind, Subscription, Subscriptions};
use super::FormEvents;
use crate::collector::{CollectorTransport, FieldMapping, FormPayload};
use crate::error::SubmissionError;
use crate::state::{BookingForm, Form, NotificationKind, Notifications, PanelState, UiMode};
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use uuid::Uuid;

pub const INVALID_FORM_MESSAGE: &str = "Please correct the errors and try again.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "There was an error submitting your booking. Please try again.";

/// An edit delivered with an input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Replace(String),
}

/// What happened when a submit was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed and the payload is on its way
    Started,
    /// One or more fields failed validation; nothing was sent
    Invalid,
    /// Submit control disabled, form hidden, or no submit listener attached
    Ignored,
}

/// Outcome of a finished submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Succeeded,
    Failed,
}

/// Shown on the thank-you panel after a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct BookingReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Local>,
}

struct PendingSubmission {
    reference: Uuid,
    outcome: oneshot::Receiver<Result<(), SubmissionError>>,
}

pub struct BookingController {
    form: BookingForm,
    mapping: FieldMapping,
    transport: Arc<dyn CollectorTransport>,
    subscriptions: Subscriptions,
    panels: PanelState,
    notifications: Notifications,
    pending: Option<PendingSubmission>,
    receipt: Option<BookingReceipt>,
}

impl BookingController {
    pub fn new(mapping: FieldMapping, transport: Arc<dyn CollectorTransport>) -> Self {
        Self {
            form: BookingForm::new(),
            mapping,
            transport,
            subscriptions: Subscriptions::default(),
            panels: PanelState::default(),
            notifications: Notifications::default(),
            pending: None,
            receipt: None,
        }
    }

    /// Register focus, blur and input listeners on every field plus the submit
    /// listener. Calling it again returns the same handles.
    pub fn attach(&mut self) -> Vec<Subscription> {
        let names: Vec<String> = self.form.fields.iter().map(|f| f.name.clone()).collect();

        let mut subs = Vec::with_capacity(names.len() * 3 + 1);
        for name in &names {
            for kind in [EventKind::Blur, EventKind::Input, EventKind::Focus] {
                subs.push(self.subscriptions.subscribe(Some(name), kind));
            }
        }
        subs.push(self.subscriptions.subscribe(None, EventKind::Submit));
        tracing::debug!("Attached {} listeners", subs.len());
        subs
    }

    /// Remove one listener
    #[allow(dead_code)]
    pub fn detach(&mut self, sub: &Subscription) -> bool {
        self.subscriptions.dispose(sub)
    }

    /// Remove every listener
    #[allow(dead_code)]
    pub fn detach_all(&mut self) {
        self.subscriptions.dispose_all();
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn mode(&self) -> UiMode {
        self.panels.mode()
    }

    pub fn panels(&self) -> &PanelState {
        &self.panels
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    pub fn receipt(&self) -> Option<&BookingReceipt> {
        self.receipt.as_ref()
    }

    /// Submit control is disabled while a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Anything that needs a fast redraw
    pub fn is_busy(&self) -> bool {
        self.is_loading() || self.panels.is_animating() || !self.notifications.is_empty()
    }

    /// Show a transient message
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.notifications.push(kind, message, now);
    }

    pub fn dismiss_notification(&mut self) -> bool {
        self.notifications.dismiss_latest()
    }

    /// Validate one field by name, replacing its inline error
    pub fn validate_field(&mut self, name: &str) -> bool {
        match self.form.index_of(name) {
            Some(index) => self.form.validate_field(index),
            None => true,
        }
    }

    /// Validate every required field; every failure is marked
    pub fn validate_form(&mut self) -> bool {
        self.form.validate_all()
    }

    /// Copy the mapped field values into a payload and hand it to the
    /// transport on a background task. The outcome arrives through the
    /// returned receiver.
    fn submit_to_collector(&self) -> oneshot::Receiver<Result<(), SubmissionError>> {
        let payload: FormPayload = self.mapping.build_payload(&self.form);
        let transport = Arc::clone(&self.transport);
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = transport.submit(payload).await;
            // Receiver gone means the controller was dropped; nothing to report to.
            let _ = tx.send(outcome);
        });
        rx
    }

    /// Check the in-flight submission without blocking
    pub fn poll_submission(&mut self, now: Instant) -> Option<SubmitResult> {
        let pending = self.pending.as_mut()?;
        let outcome = match pending.outcome.try_recv() {
            Ok(outcome) => outcome,
            Err(oneshot::error::TryRecvError::Empty) => return None,
            Err(oneshot::error::TryRecvError::Closed) => Err(SubmissionError::Dropped),
        };
        Some(self.finish_submission(outcome, now))
    }

    /// Wait for the in-flight submission to finish
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self, now: Instant) -> Option<SubmitResult> {
        let pending = self.pending.as_mut()?;
        let outcome = (&mut pending.outcome)
            .await
            .unwrap_or(Err(SubmissionError::Dropped));
        Some(self.finish_submission(outcome, now))
    }

    fn finish_submission(
        &mut self,
        outcome: Result<(), SubmissionError>,
        now: Instant,
    ) -> SubmitResult {
        let reference = self.pending.take().map(|p| p.reference).unwrap_or_else(Uuid::new_v4);

        match outcome {
            Ok(()) => {
                tracing::info!(%reference, "Booking submitted");
                self.receipt = Some(BookingReceipt {
                    reference,
                    submitted_at: Local::now(),
                });
                self.panels.begin_thank_you(now);
                SubmitResult::Succeeded
            }
            Err(err) => {
                tracing::error!(%reference, "Submission error: {err}");
                self.notifications
                    .push(NotificationKind::Error, SUBMIT_FAILED_MESSAGE, now);
                SubmitResult::Failed
            }
        }
    }

    /// Return to the form from the thank-you panel, clearing every value,
    /// error and focus marker. Does nothing while the form is visible.
    pub fn reset(&mut self, now: Instant) -> bool {
        if !self.panels.show_form(now) {
            return false;
        }
        self.form.reset();
        self.receipt = None;
        tracing::debug!("Form reset");
        true
    }

    /// Advance animations and expire notifications
    pub fn tick(&mut self, now: Instant) {
        if self.panels.tick(now) {
            tracing::debug!("Thank-you panel shown");
        }
        self.notifications.prune(now);
    }

    fn accepts_input(&self) -> bool {
        self.panels.mode() == UiMode::FormVisible && !self.panels.is_animating()
    }

    fn active_field_name(&self) -> Option<String> {
        self.form
            .get_field(self.form.active_field())
            .map(|f| f.name.clone())
    }

    fn move_focus(&mut self, forward: bool) {
        if let Some(name) = self.active_field_name() {
            self.on_field_blur(&name);
        }
        if forward {
            self.form.next_field();
        } else {
            self.form.prev_field();
        }
        if let Some(name) = self.active_field_name() {
            self.on_field_focus(&name);
        }
    }

    /// Tab
    pub fn focus_next(&mut self) {
        if self.accepts_input() {
            self.move_focus(true);
        }
    }

    /// Shift+Tab
    pub fn focus_prev(&mut self) {
        if self.accepts_input() {
            self.move_focus(false);
        }
    }

    /// Type into the active field
    pub fn type_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            self.on_field_input(&name, FieldEdit::Insert(c));
        }
    }

    /// Delete from the active field
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.on_field_input(&name, FieldEdit::Backspace);
        }
    }

    /// Empty the active field
    pub fn clear_active_field(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.on_field_input(&name, FieldEdit::Replace(String::new()));
        }
    }
}

impl FormEvents for BookingController {
    fn on_field_focus(&mut self, field: &str) {
        if !self.subscriptions.is_live(Some(field), EventKind::Focus) {
            return;
        }
        if let Some(f) = self.form.field_mut(field) {
            f.focused = true;
        }
    }

    fn on_field_blur(&mut self, field: &str) {
        if !self.subscriptions.is_live(Some(field), EventKind::Blur) {
            return;
        }
        self.validate_field(field);
        if let Some(f) = self.form.field_mut(field) {
            if f.value.is_empty() {
                f.focused = false;
            }
        }
    }

    fn on_field_input(&mut self, field: &str, edit: FieldEdit) {
        if !self.accepts_input() {
            return;
        }
        let listening = self.subscriptions.is_live(Some(field), EventKind::Input);
        let Some(f) = self.form.field_mut(field) else {
            return;
        };
        match edit {
            FieldEdit::Insert(c) => f.push_char(c),
            FieldEdit::Backspace => f.pop_char(),
            FieldEdit::Replace(value) => f.set_value(value),
        }
        if listening {
            f.clear_error();
        }
    }

    fn on_submit(&mut self, now: Instant) -> SubmitStart {
        if !self.subscriptions.is_live(None, EventKind::Submit)
            || self.is_loading()
            || !self.accepts_input()
        {
            return SubmitStart::Ignored;
        }

        if !self.validate_form() {
            self.notifications
                .push(NotificationKind::Error, INVALID_FORM_MESSAGE, now);
            return SubmitStart::Invalid;
        }

        let reference = Uuid::new_v4();
        tracing::info!(%reference, "Submitting booking");
        let outcome = self.submit_to_collector();
        self.pending = Some(PendingSubmission { reference, outcome });
        SubmitStart::Started
    }
}
