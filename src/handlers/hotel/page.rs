use axum::{
    extract::{Path, State},
    Extension,
};
use serde::Serialize;
use uuid::Uuid;

use super::resolve_access;
use crate::hotel::{HotelDraft, HotelForm, Room};
use crate::image::{ImageState, ImageStatus, Toaster};
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::nav::{NavItem, NavMenu};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPageView {
    pub heading: &'static str,
    pub hotel_id: Option<Uuid>,
    pub draft: HotelDraft,
    pub image: ImageState,
    pub image_status: ImageStatus,
    pub rooms: Vec<Room>,
    pub nav: NavView,
}

#[derive(Debug, Serialize)]
pub struct NavView {
    pub open: bool,
    pub items: &'static [NavItem],
}

/// GET /hotel/:hotel_id - form view for a new (`new`) or owned hotel
pub async fn hotel_page(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Path(hotel_id): Path<String>,
) -> ApiResult<HotelPageView> {
    let (user, hotel) = resolve_access(&state, &caller, &hotel_id).await?;
    tracing::debug!("Rendering hotel form '{}' for user '{}'", hotel_id, user.user_id);

    // Toasts only matter to an interactive session
    let (toaster, _toasts) = Toaster::channel();
    let form = HotelForm::new(hotel.as_ref(), toaster);
    let menu = NavMenu::new();

    Ok(ApiResponse::success(HotelPageView {
        heading: form.heading(),
        hotel_id: hotel.as_ref().map(|h| h.hotel.id),
        draft: form.draft().clone(),
        image: form.image().state().clone(),
        image_status: form.image().status(),
        rooms: hotel.map(|h| h.rooms).unwrap_or_default(),
        nav: NavView {
            open: menu.is_open(),
            items: menu.items(),
        },
    }))
}
