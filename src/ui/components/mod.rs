//! Reusable UI components

mod button;

pub use button::{render_submit_button, BUTTON_HEIGHT};
