//! Button component for TUI

use crate::state::SubmitStyle;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Spinner frames shown while the submit control is loading
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Render the submit control from its style descriptor
pub fn render_submit_button(frame: &mut Frame, area: Rect, style: &SubmitStyle, spinner_tick: usize) {
    let border_style = if style.selected && !style.disabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if style.disabled {
        Style::default().fg(Color::DarkGray)
    } else if style.selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let content = if style.loading {
        format!(" {} {} ", SPINNER[spinner_tick % SPINNER.len()], style.label)
    } else {
        format!(" {} ", style.label)
    };

    let paragraph = Paragraph::new(content)
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
