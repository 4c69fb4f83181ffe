use axum::{
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::storage::DeleteFilesResult;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub image_key: String,
}

/// Failures of the proxy, rendered as plain-text bodies with no provider detail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyError {
    BadRequest,
    Unauthorized,
    Forbidden,
    Internal,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ProxyError::BadRequest => (StatusCode::BAD_REQUEST, "Bad Request."),
            ProxyError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized."),
            ProxyError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden."),
            ProxyError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        };
        (status, body).into_response()
    }
}

/// POST /api/uploadthing/delete - delete an uploaded image at the storage provider
///
/// The body is only read once the caller is known. Callers may delete files
/// they uploaded or that back one of their hotels; files with no known owner
/// are accepted.
///
/// Expected Input:
/// ```json
/// { "imageKey": "2e0fdb64-9957-4262-8e45-f372ba903ac8_hotel.png" }
/// ```
///
/// Output is the provider's result object, e.g. `{ "success": true, "deletedCount": 1 }`.
pub async fn delete_image(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentUser>,
    request: Request,
) -> Result<Json<DeleteFilesResult>, ProxyError> {
    let user = caller.user().ok_or(ProxyError::Unauthorized)?;

    let Json(DeleteRequest { image_key }) = Json::<DeleteRequest>::from_request(request, &state)
        .await
        .map_err(|rejection| {
            tracing::debug!("Rejected delete body: {}", rejection);
            ProxyError::BadRequest
        })?;

    match state.store.image_owner(&image_key).await {
        Ok(Some(owner)) if owner != user.user_id => {
            tracing::warn!(
                "User '{}' tried to delete image '{}' owned by '{}'",
                user.user_id,
                image_key,
                owner
            );
            return Err(ProxyError::Forbidden);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Ownership lookup failed for '{}': {}", image_key, e);
            return Err(ProxyError::Internal);
        }
    }

    let result = state
        .storage
        .delete_files(std::slice::from_ref(&image_key))
        .await
        .map_err(|e| {
            tracing::error!("error uploadthing/delete: {}", e);
            ProxyError::Internal
        })?;

    if result.success {
        if let Err(e) = state.store.forget_image(&image_key).await {
            tracing::warn!("Could not drop attribution for '{}': {}", image_key, e);
        }
    }

    tracing::info!("User '{}' deleted image '{}'", user.user_id, image_key);
    Ok(Json(result))
}
