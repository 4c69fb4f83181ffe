pub mod page;
pub mod submit;

pub use page::hotel_page;
pub use submit::submit_hotel;

use uuid::Uuid;

use crate::error::ApiError;
use crate::hotel::HotelWithRooms;
use crate::middleware::{AuthUser, CurrentUser};
use crate::state::AppState;

/// Who may open a hotel form: any signed-in user for a new listing, only the
/// owner for an existing one. `new` and ids that are not uuids mean a new listing.
pub(crate) async fn resolve_access(
    state: &AppState,
    caller: &CurrentUser,
    hotel_id: &str,
) -> Result<(AuthUser, Option<HotelWithRooms>), ApiError> {
    let user = caller
        .user()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Not Authenticated"))?;

    let hotel = match Uuid::parse_str(hotel_id) {
        Ok(id) => state.store.get_hotel_by_id(id).await?,
        Err(_) => None,
    };

    if let Some(existing) = &hotel {
        if !existing.hotel.is_owned_by(&user.user_id) {
            tracing::warn!(
                "User '{}' denied access to hotel {} owned by '{}'",
                user.user_id,
                existing.hotel.id,
                existing.hotel.user_id
            );
            return Err(ApiError::forbidden("Access Denied"));
        }
    }

    Ok((user, hotel))
}
