//! Form field value objects

use crate::error::ValidationError;

/// What kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

/// Represents a single form field with its configuration, value and UI markers
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub is_multiline: bool,
    pub value: String,
    /// Set while the field has focus, and kept afterwards while it holds a value
    pub focused: bool,
    /// Inline error annotation, if the last check failed
    pub error: Option<ValidationError>,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind, required: bool, is_multiline: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            is_multiline,
            value: String::new(),
            focused: false,
            error: None,
        }
    }

    /// Create a new single-line text field
    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required, false)
    }

    /// Create a new multiline text field
    pub fn text_area(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required, true)
    }

    /// Create a new email field
    pub fn email(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Email, required, false)
    }

    /// Create a new phone field
    pub fn phone(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Phone, required, false)
    }

    /// Whether an inline error is currently shown
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Replace the value
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Remove the inline error annotation
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Return the field to its pristine state
    pub fn reset(&mut self) {
        self.value.clear();
        self.focused = false;
        self.error = None;
    }
}
