//! Declarative style descriptors
//!
//! Pure functions from field/panel state to what should be drawn. The ratatui
//! layer only translates these into colors and layout, so none of the
//! highlighting rules need a terminal to test.

use super::forms::FormField;
use super::panel_state::{PanelMotion, PanelState, UiMode};
use std::time::Instant;

/// Border tone of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Focused,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldStyle {
    pub border: Tone,
    /// `focused` marker
    pub focused: bool,
    /// `has-error` marker
    pub has_error: bool,
    pub error_text: Option<String>,
    pub show_cursor: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitStyle {
    pub label: &'static str,
    pub disabled: bool,
    pub loading: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    pub form_visible: bool,
    pub thank_you_visible: bool,
    pub form_motion: PanelMotion,
}

pub fn field_style(field: &FormField, is_active: bool, mode: UiMode) -> FieldStyle {
    let interactive = mode == UiMode::FormVisible;
    let border = if field.has_error() {
        Tone::Error
    } else if is_active && interactive {
        Tone::Focused
    } else {
        Tone::Neutral
    };

    FieldStyle {
        border,
        focused: field.focused,
        has_error: field.has_error(),
        error_text: field.error.map(|e| e.to_string()),
        show_cursor: is_active && interactive,
    }
}

pub fn submit_style(loading: bool, selected: bool) -> SubmitStyle {
    SubmitStyle {
        label: if loading { "Booking..." } else { "Book Ride" },
        disabled: loading,
        loading,
        selected,
    }
}

pub fn panel_style(panels: &PanelState, now: Instant) -> PanelStyle {
    PanelStyle {
        form_visible: panels.mode() == UiMode::FormVisible,
        thank_you_visible: panels.mode() == UiMode::ThankYouVisible,
        form_motion: panels.form_motion(now),
    }
}
