//! UI module for rendering the TUI
//!
//! Everything here is a thin adapter: state is turned into style descriptors
//! by `crate::state::style`, and these functions only map descriptors onto
//! ratatui widgets.

mod components;
mod forms;
mod layout;
mod notifications;
mod thank_you;

use crate::app::App;
use crate::state::panel_style;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let (header_area, main_area) = layout::create_layout(frame.area());
    layout::draw_header(frame, header_area);

    let panels = panel_style(app.controller.panels(), now);
    if panels.form_visible {
        forms::draw_booking_form(frame, main_area, app, panels.form_motion);
    }
    if panels.thank_you_visible {
        thank_you::draw(frame, main_area, app);
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Toasts go on top of everything
    notifications::draw(frame, app.controller.notifications(), now);
}
