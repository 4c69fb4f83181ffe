use axum::{
    extract::{FromRequest, Path, Request, State},
    Extension, Json,
};

use super::resolve_access;
use crate::error::ApiError;
use crate::hotel::{validate, Hotel, HotelDraft, HotelWithRooms};
use crate::image::image_key;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::state::AppState;

/// POST /api/hotel/:hotel_id - validate a draft and persist it
///
/// `new` creates a listing owned by the caller (201); an owned hotel id
/// updates it in place (200). Invalid drafts get 422 with `field_errors`.
/// The body is only read once the caller may open the hotel, and the draft's
/// image must not belong to another user.
pub async fn submit_hotel(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(hotel_id): Path<String>,
    request: Request,
) -> ApiResult<HotelWithRooms> {
    let (user, existing) = resolve_access(&state, &caller, &hotel_id).await?;

    let Json(draft) = Json::<HotelDraft>::from_request(request, &state)
        .await
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    validate(&draft)?;

    let key = image_key(&draft.image).to_string();
    if let Some(owner) = state.store.image_owner(&key).await? {
        if owner != user.user_id {
            tracing::warn!(
                "User '{}' submitted image '{}' owned by '{}'",
                user.user_id,
                key,
                owner
            );
            return Err(ApiError::forbidden("Image belongs to another user"));
        }
    }

    tracing::info!(values = ?draft, "Hotel submission accepted for user '{}'", user.user_id);

    let response = match existing {
        Some(HotelWithRooms { mut hotel, .. }) => {
            hotel.apply_draft(draft);
            ApiResponse::success(state.store.update_hotel(hotel).await?)
        }
        None => {
            let hotel = Hotel::from_draft(user.user_id.clone(), draft);
            ApiResponse::created(state.store.save_hotel(hotel).await?)
        }
    };

    state.store.record_upload(&key, &user.user_id).await?;

    Ok(response)
}
