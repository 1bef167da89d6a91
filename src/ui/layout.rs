//! Layout components (header, status bar)

use crate::app::App;
use crate::state::UiMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the centered booking card
const CARD_WIDTH: u16 = 64;

/// Split the screen into header and a centered content card, reserving the
/// bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let card_width = CARD_WIDTH.min(rows[1].width);
    let card = Rect {
        x: rows[1].x + (rows[1].width - card_width) / 2,
        y: rows[1].y,
        width: card_width,
        height: rows[1].height,
    };

    (rows[0], card)
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Book Your Ride",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Quick, safe and reliable pickups",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Key hints for the visible panel
fn get_hints(app: &App) -> &'static str {
    match app.controller.mode() {
        UiMode::FormVisible => " Tab:next field  S-Tab:prev  ^U:clear  Enter:next/submit  ^S:submit  Esc:dismiss",
        UiMode::ThankYouVisible => " Enter/n:book another ride  q:quit",
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    let indicator = if app.controller.is_loading() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);
    spans.push(Span::styled(get_hints(app), Style::default().fg(Color::Gray)));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.transport_label.as_str(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if area.width > hint_width {
        let hint_area = Rect {
            x: area.width - hint_width,
            y: status_area.y,
            width: hint_width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(quit_hint).style(Style::default().fg(Color::Gray).bg(Color::DarkGray)),
            hint_area,
        );
    }
}
