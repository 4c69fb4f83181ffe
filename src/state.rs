use std::sync::Arc;

use crate::storage::StorageProvider;
use crate::store::HotelStore;

/// Shared collaborators handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HotelStore>,
    pub storage: Arc<dyn StorageProvider>,
}

impl AppState {
    pub fn new(store: Arc<dyn HotelStore>, storage: Arc<dyn StorageProvider>) -> Self {
        Self { store, storage }
    }
}
