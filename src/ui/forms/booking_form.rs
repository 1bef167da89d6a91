//! Booking form panel

use super::field_renderer::{draw_field, ERROR_LINE_HEIGHT};
use crate::app::App;
use crate::state::{field_style, submit_style, PanelMotion};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// Panels at or below this opacity are not drawn at all
const INVISIBLE_BELOW: f32 = 0.05;
/// Panels below this opacity are drawn dimmed
const DIM_BELOW: f32 = 0.6;

/// Height of a field row, including its error line
fn field_height(is_multiline: bool) -> u16 {
    let input = if is_multiline { 5 } else { 3 };
    input + ERROR_LINE_HEIGHT
}

/// Shift an area vertically, staying inside `bounds`
fn offset_area(area: Rect, offset_rows: i16, bounds: Rect) -> Rect {
    let y = (area.y as i32 + offset_rows as i32)
        .clamp(bounds.y as i32, (bounds.y + bounds.height) as i32) as u16;
    let height = area.height.min((bounds.y + bounds.height).saturating_sub(y));
    Rect { y, height, ..area }
}

/// Draw the booking form, faded/slid according to `motion`
pub fn draw_booking_form(frame: &mut Frame, area: Rect, app: &App, motion: PanelMotion) {
    if motion.opacity <= INVISIBLE_BELOW {
        return;
    }
    let dimmed = motion.opacity < DIM_BELOW;
    let area = offset_area(area, motion.offset_rows, frame.area());

    let card = Block::default()
        .title(" Ride Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if dimmed { Color::DarkGray } else { Color::Cyan }));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let controller = &app.controller;
    let form = controller.form();

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f.is_multiline)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in form.fields.iter().enumerate() {
        let is_active = index == form.active_field_index;
        let style = field_style(field, is_active, controller.mode());
        draw_field(frame, rows[index], field, &style, dimmed);
    }

    let button = submit_style(controller.is_loading(), form.is_submit_active());
    let button_area = rows[form.fields.len()];
    render_submit_button(frame, button_area, &button, spinner_tick());
}

/// Spinner frame derived from the wall clock, ~8 frames per second
fn spinner_tick() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_millis() / 125) as usize)
        .unwrap_or(0)
}
