use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::image::image_key;
use crate::middleware::{ApiResponse, ApiResult, CurrentUser};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadCompleteRequest {
    pub url: String,
    /// Provider file key; derived from the URL when absent
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecorded {
    pub image_key: String,
    pub user_id: String,
}

/// POST /api/uploadthing/complete - attribute a finished upload to the caller
///
/// Lets the delete proxy tell a caller's own uploads apart from someone else's.
pub async fn upload_complete(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    Json(payload): Json<UploadCompleteRequest>,
) -> ApiResult<UploadRecorded> {
    let user = caller
        .user()
        .ok_or_else(|| ApiError::unauthorized("Unauthorized."))?;

    let key = payload
        .key
        .filter(|key| !key.is_empty())
        .unwrap_or_else(|| image_key(&payload.url).to_string());
    if key.is_empty() {
        return Err(ApiError::bad_request("Upload URL has no file key"));
    }

    if let Some(owner) = state.store.image_owner(&key).await? {
        if owner != user.user_id {
            tracing::warn!("User '{}' tried to claim image '{}' owned by '{}'", user.user_id, key, owner);
            return Err(ApiError::forbidden("Image belongs to another user"));
        }
    }

    state.store.record_upload(&key, &user.user_id).await?;
    tracing::info!("Recorded upload '{}' for user '{}'", key, user.user_id);

    Ok(ApiResponse::created(UploadRecorded {
        image_key: key,
        user_id: user.user_id.clone(),
    }))
}
