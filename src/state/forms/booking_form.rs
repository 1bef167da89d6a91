//! The booking form: its fields and focus handling

use super::field::FormField;
use super::validation::check_field;

/// Logical field names, as used by the field mapping
pub const FULL_NAME: &str = "fullName";
pub const MOBILE: &str = "mobile";
pub const EMAIL: &str = "email";
pub const ADDRESS: &str = "address";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Ride booking form
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub fields: Vec<FormField>,
    /// Focus slot; `fields.len()` is the submit control
    pub active_field_index: usize,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::text(FULL_NAME, "Full Name", true),
                FormField::phone(MOBILE, "Mobile Number", true),
                FormField::email(EMAIL, "Email Address", true),
                FormField::text_area(ADDRESS, "Pickup Address", true),
            ],
            active_field_index: 0,
        }
    }

    /// Index of the submit control in the focus order
    pub fn submit_index(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the submit control has focus
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.submit_index()
    }

    /// Position of a field by logical name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Re-check a single field, replacing its inline error
    pub fn validate_field(&mut self, index: usize) -> bool {
        let Some(field) = self.fields.get_mut(index) else {
            return true;
        };
        field.clear_error();
        match check_field(field) {
            Ok(()) => true,
            Err(err) => {
                field.error = Some(err);
                false
            }
        }
    }

    /// Check every required field. Does not stop at the first failure so that
    /// every error is shown at once.
    pub fn validate_all(&mut self) -> bool {
        let required: Vec<usize> = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.required)
            .map(|(i, _)| i)
            .collect();

        required
            .into_iter()
            .fold(true, |all_valid, i| self.validate_field(i) && all_valid)
    }

    /// Clear values, errors and focus markers on every field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.active_field_index = 0;
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BookingForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit control
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.submit_index());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
