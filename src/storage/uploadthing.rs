use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use url::Url;

use super::{DeleteFilesResult, StorageError, StorageProvider};
use crate::config::StorageConfig;

const API_KEY_HEADER: &str = "x-uploadthing-api-key";
const API_VERSION_HEADER: &str = "x-uploadthing-version";
const API_VERSION: &str = "6.4.0";

/// REST client for the UploadThing file API
#[derive(Debug, Clone)]
pub struct UploadThingApi {
    http: Client,
    api_url: Url,
    api_key: String,
}

impl UploadThingApi {
    pub fn new(api_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self, StorageError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_url: Url::parse(api_url)?,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::new(
            &config.api_url,
            config.api_secret.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorageError> {
        Ok(self.api_url.join(path)?)
    }
}

#[async_trait]
impl StorageProvider for UploadThingApi {
    async fn delete_files(&self, keys: &[String]) -> Result<DeleteFilesResult, StorageError> {
        if self.api_key.is_empty() {
            return Err(StorageError::NotConfigured);
        }

        let url = self.endpoint("/v6/deleteFiles")?;
        tracing::debug!("Deleting {} file(s) via {}", keys.len(), url);

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_VERSION_HEADER, API_VERSION)
            .json(&json!({ "fileKeys": keys }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<DeleteFilesResult>().await?)
    }
}
