use serde::{Deserialize, Serialize};
use std::fmt;

use super::model::Hotel;

/// The in-progress hotel record edited by the form.
///
/// Every field has a default so a partially filled JSON body still
/// deserializes; the validator decides whether it is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub location_description: String,
    pub gym: bool,
    pub spa: bool,
    pub free_wifi: bool,
    pub pool: bool,
    pub laundry: bool,
}

impl From<&Hotel> for HotelDraft {
    fn from(hotel: &Hotel) -> Self {
        Self {
            title: hotel.title.clone(),
            description: hotel.description.clone(),
            image: hotel.image.clone(),
            country: hotel.country.clone(),
            state: hotel.state.clone(),
            city: hotel.city.clone(),
            location_description: hotel.location_description.clone(),
            gym: hotel.gym,
            spa: hotel.spa,
            free_wifi: hotel.free_wifi,
            pool: hotel.pool,
            laundry: hotel.laundry,
        }
    }
}

impl HotelDraft {
    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::Title(v) => self.title = v,
            FieldValue::Description(v) => self.description = v,
            FieldValue::Image(v) => self.image = v,
            FieldValue::Country(v) => self.country = v,
            FieldValue::State(v) => self.state = v,
            FieldValue::City(v) => self.city = v,
            FieldValue::LocationDescription(v) => self.location_description = v,
            FieldValue::Gym(v) => self.gym = v,
            FieldValue::Spa(v) => self.spa = v,
            FieldValue::FreeWifi(v) => self.free_wifi = v,
            FieldValue::Pool(v) => self.pool = v,
            FieldValue::Laundry(v) => self.laundry = v,
        }
    }
}

/// Field names as they appear on the wire and in error maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HotelField {
    Title,
    Description,
    Image,
    Country,
    State,
    City,
    LocationDescription,
    Gym,
    Spa,
    FreeWifi,
    Pool,
    Laundry,
}

impl HotelField {
    pub const ALL: [HotelField; 12] = [
        HotelField::Title,
        HotelField::Description,
        HotelField::Image,
        HotelField::Country,
        HotelField::State,
        HotelField::City,
        HotelField::LocationDescription,
        HotelField::Gym,
        HotelField::Spa,
        HotelField::FreeWifi,
        HotelField::Pool,
        HotelField::Laundry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HotelField::Title => "title",
            HotelField::Description => "description",
            HotelField::Image => "image",
            HotelField::Country => "country",
            HotelField::State => "state",
            HotelField::City => "city",
            HotelField::LocationDescription => "locationDescription",
            HotelField::Gym => "gym",
            HotelField::Spa => "spa",
            HotelField::FreeWifi => "freeWifi",
            HotelField::Pool => "pool",
            HotelField::Laundry => "laundry",
        }
    }
}

impl fmt::Display for HotelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single keystroke-level edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Title(String),
    Description(String),
    Image(String),
    Country(String),
    State(String),
    City(String),
    LocationDescription(String),
    Gym(bool),
    Spa(bool),
    FreeWifi(bool),
    Pool(bool),
    Laundry(bool),
}

impl FieldValue {
    pub fn field(&self) -> HotelField {
        match self {
            FieldValue::Title(_) => HotelField::Title,
            FieldValue::Description(_) => HotelField::Description,
            FieldValue::Image(_) => HotelField::Image,
            FieldValue::Country(_) => HotelField::Country,
            FieldValue::State(_) => HotelField::State,
            FieldValue::City(_) => HotelField::City,
            FieldValue::LocationDescription(_) => HotelField::LocationDescription,
            FieldValue::Gym(_) => HotelField::Gym,
            FieldValue::Spa(_) => HotelField::Spa,
            FieldValue::FreeWifi(_) => HotelField::FreeWifi,
            FieldValue::Pool(_) => HotelField::Pool,
            FieldValue::Laundry(_) => HotelField::Laundry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_draft_defaults() {
        let draft = HotelDraft::default();
        assert!(draft.title.is_empty());
        assert!(!draft.gym && !draft.spa && !draft.free_wifi && !draft.pool && !draft.laundry);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let draft: HotelDraft = serde_json::from_str(r#"{"title":"Heaven Hotel","freeWifi":true}"#).unwrap();
        assert_eq!(draft.title, "Heaven Hotel");
        assert!(draft.free_wifi);
        assert_eq!(draft.location_description, "");
    }

    #[test]
    fn test_field_names_match_wire_keys() {
        for field in HotelField::ALL {
            let wire = serde_json::to_value(field).unwrap();
            assert_eq!(wire, serde_json::Value::String(field.as_str().to_string()));
        }
    }

    #[test]
    fn test_apply_sets_only_named_field() {
        let mut draft = HotelDraft::default();
        let value = FieldValue::Country("USA".to_string());
        assert_eq!(value.field(), HotelField::Country);
        draft.apply(value);
        assert_eq!(draft.country, "USA");
        assert_eq!(draft, HotelDraft { country: "USA".to_string(), ..HotelDraft::default() });
    }
}
