//! Form domain layer
//!
//! Field values, format checks and the booking form itself. Nothing here knows
//! about rendering or submission.

mod booking_form;
mod field;
mod validation;

pub use booking_form::{BookingForm, Form, ADDRESS, EMAIL, FULL_NAME, MOBILE};
pub use field::FormField;
