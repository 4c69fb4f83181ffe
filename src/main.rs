use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use hotel_listing::{
    app::app,
    config::config,
    is_production,
    state::AppState,
    storage::UploadThingApi,
    store::InMemoryHotelStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up JWT_SECRET, UPLOADTHING_SECRET, etc.
    let _ = dotenvy::dotenv();

    let config = config();

    let default_filter = if config.api.enable_request_logging {
        "hotel_listing=debug,tower_http=debug"
    } else {
        "hotel_listing=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    tracing::info!("Starting hotel listing service in {:?} mode", config.environment);

    if config.security.jwt_secret.is_empty() {
        anyhow::bail!("JWT_SECRET must be set outside development");
    }
    if config.storage.api_secret.is_empty() {
        tracing::warn!("UPLOADTHING_SECRET is not set; image deletions will fail");
    }
    if is_production!() {
        tracing::warn!("Hotel listings are kept in memory and lost on restart");
    }

    let storage = UploadThingApi::from_config(&config.storage).context("failed to build storage client")?;
    let state = AppState::new(Arc::new(InMemoryHotelStore::new()), Arc::new(storage));

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Hotel listing service listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server error")?;

    Ok(())
}
