#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{Map, Value};
use tower::ServiceExt;

use hotel_listing::{
    app::app,
    auth::{generate_jwt, Claims},
    state::AppState,
    storage::{DeleteFilesResult, StorageError, StorageProvider},
    store::InMemoryHotelStore,
};

/// Storage provider double that records every deletion it is asked for
#[derive(Default)]
pub struct FakeStorage {
    pub fail: bool,
    /// Provider-specific fields added to every successful result
    pub extra: Map<String, Value>,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl FakeStorage {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_extra(extra: Value) -> Self {
        Self {
            extra: extra.as_object().cloned().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl StorageProvider for FakeStorage {
    async fn delete_files(&self, keys: &[String]) -> Result<DeleteFilesResult, StorageError> {
        self.calls.lock().unwrap().push(keys.to_vec());
        if self.fail {
            return Err(StorageError::Status {
                status: 502,
                body: "upstream exploded at 10.1.2.3".to_string(),
            });
        }
        let mut result = DeleteFilesResult::new(true, keys.len() as u32);
        result.extra = self.extra.clone();
        Ok(result)
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryHotelStore>,
    pub storage: Arc<FakeStorage>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_storage(FakeStorage::default())
    }

    pub fn with_storage(storage: FakeStorage) -> Self {
        let store = Arc::new(InMemoryHotelStore::new());
        let storage = Arc::new(storage);
        let router = app(AppState::new(store.clone(), storage.clone()));
        Self { router, store, storage }
    }

    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, String)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, String::from_utf8(bytes.to_vec())?))
    }

    pub async fn send_json(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let (status, body) = self.send(request).await?;
        let json = serde_json::from_str(&body).with_context(|| format!("not JSON: {}", body))?;
        Ok((status, json))
    }
}

pub fn token_for(user_id: &str) -> String {
    generate_jwt(&Claims::new(user_id)).expect("token")
}

pub fn post_json(uri: &str, user: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(user)));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

/// POST with a JSON content type but an arbitrary, possibly malformed, body
pub fn post_raw(uri: &str, user: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/json");
    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(user)));
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub fn get(uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(user) = user {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(user)));
    }
    builder.body(Body::empty()).expect("request")
}

pub fn valid_draft() -> Value {
    serde_json::json!({
        "title": "Heaven Hotel",
        "description": "A nice quiet place to stay",
        "image": "https://cdn/x.png",
        "country": "USA",
        "locationDescription": "Near the lake shore",
        "pool": true
    })
}
