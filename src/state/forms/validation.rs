//! Field format checks

use super::field::{FieldKind, FormField};
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Mobile numbers are exactly 10 digits once everything else is stripped.
const MOBILE_DIGITS: usize = 10;

/// Check an email address against the accepted shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a mobile number; separators and other non-digits are ignored
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile.chars().filter(char::is_ascii_digit).count() == MOBILE_DIGITS
}

/// Validate a field's current value without touching its error state
pub fn check_field(field: &FormField) -> Result<(), ValidationError> {
    let value = field.value.trim();

    if field.required && value.is_empty() {
        return Err(ValidationError::Required);
    }
    if value.is_empty() {
        return Ok(());
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => Err(ValidationError::InvalidEmail),
        FieldKind::Phone if !is_valid_mobile(value) => Err(ValidationError::InvalidMobile),
        _ => Ok(()),
    }
}
