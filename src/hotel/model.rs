use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::draft::HotelDraft;

/// A hotel listing as the data store keeps it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: Uuid,
    pub user_id: String,
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
    pub added_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    /// Build a fresh listing for `user_id` out of a validated draft
    pub fn from_draft(user_id: impl Into<String>, draft: HotelDraft) -> Self {
        let now = Utc::now();
        let mut hotel = Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            title: String::new(),
            description: String::new(),
            image: String::new(),
            country: String::new(),
            state: String::new(),
            city: String::new(),
            location_description: String::new(),
            gym: false,
            spa: false,
            free_wifi: false,
            pool: false,
            laundry: false,
            added_at: now,
            updated_at: now,
        };
        hotel.apply_draft(draft);
        hotel
    }

    /// Overwrite the editable fields, keeping identity and ownership
    pub fn apply_draft(&mut self, draft: HotelDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.image = draft.image;
        self.country = draft.country;
        self.state = draft.state;
        self.city = draft.city;
        self.location_description = draft.location_description;
        self.gym = draft.gym;
        self.spa = draft.spa;
        self.free_wifi = draft.free_wifi;
        self.pool = draft.pool;
        self.laundry = draft.laundry;
        self.updated_at = Utc::now();
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRooms {
    #[serde(flatten)]
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

impl HotelWithRooms {
    pub fn new(hotel: Hotel) -> Self {
        Self {
            hotel,
            rooms: Vec::new(),
        }
    }
}
