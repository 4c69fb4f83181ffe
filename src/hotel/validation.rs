use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

use super::draft::{HotelDraft, HotelField};

/// Per-field validation failures, keyed by wire field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("hotel draft failed validation on {} field(s)", .0.len())]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<HotelField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: HotelField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: HotelField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = HotelField> + '_ {
        self.0.keys().copied()
    }

    pub(crate) fn insert(&mut self, field: HotelField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub(crate) fn remove(&mut self, field: HotelField) {
        self.0.remove(&field);
    }

    /// Keep only the entries for which `keep` returns true
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(HotelField) -> bool) {
        self.0.retain(|field, _| keep(*field));
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.0
            .into_iter()
            .map(|(field, message)| (field.as_str().to_string(), message))
            .collect()
    }
}

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check one field; `None` means the field is acceptable
pub fn validate_field(draft: &HotelDraft, field: HotelField) -> Option<&'static str> {
    match field {
        HotelField::Title if !min_chars(&draft.title, 3) => {
            Some("Title must be at least 3 characters long.")
        }
        HotelField::Description if !min_chars(&draft.description, 10) => {
            Some("Description must be at least 10 characters long.")
        }
        HotelField::Image if draft.image.is_empty() => Some("Image is required"),
        HotelField::Country if draft.country.is_empty() => Some("Country is required"),
        HotelField::LocationDescription if !min_chars(&draft.location_description, 10) => {
            Some("Location description must be at least 10 characters long.")
        }
        // state, city and the amenity flags are optional
        _ => None,
    }
}

/// Validate a whole draft. Submission is all-or-nothing.
pub fn validate(draft: &HotelDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in HotelField::ALL {
        if let Some(message) = validate_field(draft, field) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
