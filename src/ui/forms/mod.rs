//! Form rendering module
//!
//! - `field_renderer`: draws one input from its style descriptor
//! - `booking_form`: lays out the booking form panel

mod booking_form;
mod field_renderer;

pub use booking_form::draw_booking_form;
