use axum::{
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::from_fn,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::config;
use crate::handlers;
use crate::middleware::identify_caller_middleware;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let config = config::config();

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Caller-aware routes; each handler decides about anonymous callers
        .merge(hotel_routes())
        .merge(uploadthing_routes())
        // Global middleware
        .layer(from_fn(identify_caller_middleware))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn hotel_routes() -> Router<AppState> {
    use handlers::hotel;

    Router::new()
        .route("/hotel/:hotel_id", get(hotel::hotel_page))
        .route("/api/hotel/:hotel_id", post(hotel::submit_hotel))
}

fn uploadthing_routes() -> Router<AppState> {
    use handlers::uploadthing;

    Router::new()
        .route("/api/uploadthing/delete", post(uploadthing::delete_image))
        .route("/api/uploadthing/complete", post(uploadthing::upload_complete))
}

fn cors_layer(security: &config::SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Hotel Listing API",
            "version": version,
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "hotel_form": "/hotel/:hotel_id (signed in; owner only for existing hotels)",
                "hotel_submit": "/api/hotel/:hotel_id (signed in; owner only for existing hotels)",
                "image_delete": "/api/uploadthing/delete (signed in)",
                "image_upload_complete": "/api/uploadthing/complete (signed in)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.get_hotel_by_id(Uuid::nil()).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "store": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "data store unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
