//! Toast notifications anchored to the top-right corner

use crate::state::{NotificationKind, Notifications};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Maximum toast width including borders
const MAX_WIDTH: u16 = 40;
/// Distance from the top and right edges
const MARGIN: u16 = 1;

fn background(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Error => Color::Red,
        NotificationKind::Info => Color::Green,
    }
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
        }
        if !current_line.is_empty() {
            current_line.push(' ');
        }
        current_line.push_str(word);
    }
    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Draw every live notification, oldest at the top
pub fn draw(frame: &mut Frame, notifications: &Notifications, now: Instant) {
    let screen = frame.area();
    let width = MAX_WIDTH.min(screen.width.saturating_sub(MARGIN * 2));
    if width < 4 {
        return;
    }
    let text_width = (width - 4) as usize; // borders + padding

    let mut y = screen.y + MARGIN;
    for notification in notifications.iter() {
        let lines = wrap_text(&notification.message, text_width);
        let height = lines.len() as u16 + 2;
        if y + height > screen.height {
            break;
        }

        // Slide in from (and out to) the right edge
        let shown = (width as f32 * notification.visible_fraction(now)).round() as u16;
        if shown > 0 {
            let area = Rect {
                x: screen.x + screen.width - MARGIN - shown,
                y,
                width: shown,
                height,
            };
            let style = Style::default().fg(Color::White).bg(background(notification.kind));
            let body: Vec<_> = lines.into_iter().map(|l| format!(" {l}")).collect();

            frame.render_widget(Clear, area);
            frame.render_widget(
                Paragraph::new(body.join("\n"))
                    .style(style)
                    .block(Block::default().borders(Borders::ALL).border_style(style)),
                area,
            );
        }
        y += height;
    }
}
