use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{HotelStore, StoreError};
use crate::hotel::{Hotel, HotelWithRooms};
use crate::image::image_key;

#[derive(Debug, Default)]
struct Inner {
    hotels: HashMap<Uuid, HotelWithRooms>,
    uploads: HashMap<String, String>,
}

/// Process-local store used in development and tests
#[derive(Debug, Default)]
pub struct InMemoryHotelStore {
    inner: RwLock<Inner>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HotelStore for InMemoryHotelStore {
    async fn get_hotel_by_id(&self, id: Uuid) -> Result<Option<HotelWithRooms>, StoreError> {
        Ok(self.inner.read().await.hotels.get(&id).cloned())
    }

    async fn save_hotel(&self, hotel: Hotel) -> Result<HotelWithRooms, StoreError> {
        let mut inner = self.inner.write().await;

        let rooms = inner
            .hotels
            .remove(&hotel.id)
            .map(|existing| existing.rooms)
            .unwrap_or_default();
        let saved = HotelWithRooms { hotel, rooms };
        inner.hotels.insert(saved.hotel.id, saved.clone());

        Ok(saved)
    }

    async fn update_hotel(&self, hotel: Hotel) -> Result<HotelWithRooms, StoreError> {
        let mut inner = self.inner.write().await;

        let entry = inner
            .hotels
            .get_mut(&hotel.id)
            .ok_or(StoreError::NotFound(hotel.id))?;
        entry.hotel = hotel;

        Ok(entry.clone())
    }

    async fn image_owner(&self, key: &str) -> Result<Option<String>, StoreError> {
        let inner = self.inner.read().await;

        if let Some(owner) = inner.uploads.get(key) {
            return Ok(Some(owner.clone()));
        }

        let owner = inner.hotels.values().find_map(|entry| {
            let uses_key = std::iter::once(entry.hotel.image.as_str())
                .chain(entry.rooms.iter().map(|room| room.image.as_str()))
                .any(|url| !url.is_empty() && image_key(url) == key);
            uses_key.then(|| entry.hotel.user_id.clone())
        });

        Ok(owner)
    }

    async fn record_upload(&self, key: &str, user_id: &str) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .uploads
            .insert(key.to_string(), user_id.to_string());
        Ok(())
    }

    async fn forget_image(&self, key: &str) -> Result<(), StoreError> {
        self.inner.write().await.uploads.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::{HotelDraft, Room};

    fn hotel_for(user: &str, image: &str) -> Hotel {
        Hotel::from_draft(
            user,
            HotelDraft {
                title: "Heaven Hotel".to_string(),
                image: image.to_string(),
                ..HotelDraft::default()
            },
        )
    }

    #[tokio::test]
    async fn test_save_then_fetch() {
        let store = InMemoryHotelStore::new();
        let hotel = hotel_for("user_1", "https://utfs.io/f/a.png");
        let id = hotel.id;

        store.save_hotel(hotel).await.unwrap();

        let fetched = store.get_hotel_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.hotel.title, "Heaven Hotel");
        assert!(store.get_hotel_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_rooms() {
        let store = InMemoryHotelStore::new();
        let mut hotel = hotel_for("user_1", "");
        let id = hotel.id;
        store.save_hotel(hotel.clone()).await.unwrap();
        store.inner.write().await.hotels.get_mut(&id).unwrap().rooms.push(Room {
            id: Uuid::new_v4(),
            hotel_id: id,
            title: "Suite".to_string(),
            description: String::new(),
            image: "https://utfs.io/f/room.png".to_string(),
        });

        hotel.title = "Heaven Hotel & Spa".to_string();
        let saved = store.save_hotel(hotel).await.unwrap();

        assert_eq!(saved.rooms.len(), 1);
        assert_eq!(saved.hotel.title, "Heaven Hotel & Spa");
        assert_eq!(store.image_owner("room.png").await.unwrap().as_deref(), Some("user_1"));
    }

    #[tokio::test]
    async fn test_update_missing_hotel_is_not_found() {
        let store = InMemoryHotelStore::new();
        let hotel = hotel_for("user_1", "");
        let id = hotel.id;

        let err = store.update_hotel(hotel).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
        assert!(store.get_hotel_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_existing_hotel() {
        let store = InMemoryHotelStore::new();
        let mut hotel = hotel_for("user_1", "");
        store.save_hotel(hotel.clone()).await.unwrap();

        hotel.title = "Heaven Hotel & Spa".to_string();
        let updated = store.update_hotel(hotel.clone()).await.unwrap();

        assert_eq!(updated.hotel.title, "Heaven Hotel & Spa");
        let fetched = store.get_hotel_by_id(hotel.id).await.unwrap().unwrap();
        assert_eq!(fetched.hotel.title, "Heaven Hotel & Spa");
    }

    #[tokio::test]
    async fn test_image_owner_from_uploads_and_hotels() {
        let store = InMemoryHotelStore::new();
        store.record_upload("fresh.png", "user_2").await.unwrap();
        store.save_hotel(hotel_for("user_1", "https://utfs.io/f/a.png")).await.unwrap();

        assert_eq!(store.image_owner("fresh.png").await.unwrap().as_deref(), Some("user_2"));
        assert_eq!(store.image_owner("a.png").await.unwrap().as_deref(), Some("user_1"));
        assert_eq!(store.image_owner("unknown.png").await.unwrap(), None);

        store.forget_image("fresh.png").await.unwrap();
        assert_eq!(store.image_owner("fresh.png").await.unwrap(), None);
    }
}
