//! Field mapping and outbound payload

use crate::state::BookingForm;
use std::collections::BTreeMap;

/// Outbound (collector field id, value) pairs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormPayload {
    pub pairs: Vec<(String, String)>,
}

impl FormPayload {
    /// Value sent under a collector field id
    #[cfg(test)]
    pub fn get(&self, external_id: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(id, _)| id == external_id)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Logical field name -> collector field id. Fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    entries: BTreeMap<String, String>,
}

impl FieldMapping {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    #[cfg(test)]
    pub fn external_id(&self, field_name: &str) -> Option<&str> {
        self.entries.get(field_name).map(String::as_str)
    }

    /// Copy each mapped field's current value under its collector id.
    ///
    /// Names with no matching field and blank ids are skipped. Values are sent
    /// as typed, untrimmed.
    pub fn build_payload(&self, form: &BookingForm) -> FormPayload {
        let pairs = self
            .entries
            .iter()
            .filter(|(_, external_id)| !external_id.is_empty())
            .filter_map(|(name, external_id)| {
                form.field(name)
                    .map(|field| (external_id.clone(), field.value.clone()))
            })
            .collect();
        FormPayload { pairs }
    }
}
