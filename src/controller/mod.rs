//! Booking form controller and its event surface

mod booking;
mod subscription;

pub use booking::BookingController;

use booking::{FieldEdit, SubmitStart};
use std::time::Instant;

/// Events the host delivers to a form.
///
/// The terminal loop calls these from key handling; tests call them directly.
/// Events for a field without a live listener of that kind are ignored.
pub trait FormEvents {
    /// Field gained focus
    fn on_field_focus(&mut self, field: &str);
    /// Field lost focus; re-validates it
    fn on_field_blur(&mut self, field: &str);
    /// Field value edited; clears its inline error
    fn on_field_input(&mut self, field: &str, edit: FieldEdit);
    /// Submit requested
    fn on_submit(&mut self, now: Instant) -> SubmitStart;
}
