//! Field rendering utilities for forms

use crate::state::{FieldStyle, FormField, Tone};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the inline error line under a field
pub const ERROR_LINE_HEIGHT: u16 = 1;

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::DarkGray,
        Tone::Focused => Color::Cyan,
        Tone::Error => Color::Red,
    }
}

/// Draw a form field, with its inline error (if any) on the line below.
///
/// `dimmed` is set while the panel is fading.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, style: &FieldStyle, dimmed: bool) {
    let border_color = if dimmed {
        Color::DarkGray
    } else {
        tone_color(style.border)
    };
    let text_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let cursor = if style.show_cursor { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.value.is_empty() && !style.show_cursor {
        Paragraph::new(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        ))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value.as_str(), text_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut label_style = Style::default().fg(border_color);
    if style.focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }
    let required_mark = if field.required { " *" } else { "" };
    let error_mark = if style.has_error { " !" } else { "" };

    let block = Block::default()
        .title(Span::styled(
            format!(" {}{}{} ", field.label, required_mark, error_mark),
            label_style,
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let input_area = Rect {
        height: area.height.saturating_sub(ERROR_LINE_HEIGHT),
        ..area
    };
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), input_area);

    if let Some(message) = &style.error_text {
        let error_area = Rect {
            x: area.x + 1,
            y: input_area.y + input_area.height,
            width: area.width.saturating_sub(1),
            height: ERROR_LINE_HEIGHT,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message.as_str(), Style::default().fg(Color::Red))),
            error_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors() {
        assert_eq!(tone_color(Tone::Neutral), Color::DarkGray);
        assert_eq!(tone_color(Tone::Focused), Color::Cyan);
        assert_eq!(tone_color(Tone::Error), Color::Red);
    }
}
