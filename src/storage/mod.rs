// storage - the hosted file provider that owns uploaded hotel images

pub mod uploadthing;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub use uploadthing::UploadThingApi;

/// Result object the provider returns for a deletion; relayed verbatim to callers.
/// A body without `success` reads as a refusal. Fields this crate does not
/// interpret are kept in `extra` so the relay does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFilesResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub deleted_count: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeleteFilesResult {
    pub fn new(success: bool, deleted_count: u32) -> Self {
        Self {
            success,
            deleted_count,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage provider is not configured")]
    NotConfigured,

    #[error("storage provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("storage provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid storage provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Deletion side of the file provider. Uploads never pass through this
/// service; the provider's widget talks to it directly.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    async fn delete_files(&self, keys: &[String]) -> Result<DeleteFilesResult, StorageError>;
}
