//! Thank-you panel shown after a successful booking

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the panel text
fn build_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Booking Confirmed!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Thank you for choosing us. Our driver will contact you shortly"),
        Line::from("to confirm your pickup details."),
        Line::from(""),
    ];

    if let Some(receipt) = app.controller.receipt() {
        lines.push(Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(Color::DarkGray)),
            Span::raw(receipt.reference.to_string()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Received:  ", Style::default().fg(Color::DarkGray)),
            Span::raw(receipt.submitted_at.format("%Y-%m-%d %H:%M").to_string()),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to book another ride"),
    ]));
    lines
}

/// Draw the thank-you panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let paragraph = Paragraph::new(build_lines(app))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, area);
}
