// store - the data-store collaborator holding hotel listings

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::hotel::{Hotel, HotelWithRooms};

pub use memory::InMemoryHotelStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Hotel not found: {0}")]
    NotFound(Uuid),

    #[error("Data store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait HotelStore: Send + Sync {
    async fn get_hotel_by_id(&self, id: Uuid) -> Result<Option<HotelWithRooms>, StoreError>;

    /// Insert or replace a listing; rooms already on record are kept
    async fn save_hotel(&self, hotel: Hotel) -> Result<HotelWithRooms, StoreError>;

    /// Replace an existing listing; `NotFound` if it is no longer on record
    async fn update_hotel(&self, hotel: Hotel) -> Result<HotelWithRooms, StoreError>;

    /// Who an uploaded file belongs to, if anybody is known to own it
    async fn image_owner(&self, image_key: &str) -> Result<Option<String>, StoreError>;

    async fn record_upload(&self, image_key: &str, user_id: &str) -> Result<(), StoreError>;

    /// Drop upload attribution after the provider deleted the file
    async fn forget_image(&self, image_key: &str) -> Result<(), StoreError>;
}
