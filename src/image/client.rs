use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use url::Url;

use super::error::DeleteError;
use super::lifecycle::ImageDeleter;
use crate::storage::DeleteFilesResult;

pub const DELETE_ROUTE: &str = "/api/uploadthing/delete";

/// Sends deletions to this service's proxy endpoint on behalf of a signed-in user
#[derive(Debug, Clone)]
pub struct ProxyDeleteClient {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

impl ProxyDeleteClient {
    pub fn new(server: &str, token: Option<String>) -> Result<Self, url::ParseError> {
        let endpoint = Url::parse(server)?.join(DELETE_ROUTE)?;

        Ok(Self {
            http: Client::new(),
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ImageDeleter for ProxyDeleteClient {
    async fn delete_image(&self, image_key: &str) -> Result<DeleteFilesResult, DeleteError> {
        let mut request = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({ "imageKey": image_key }));

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeleteError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<DeleteFilesResult>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_replaces_server_path() {
        let client = ProxyDeleteClient::new("http://127.0.0.1:3000/hotel/new", None).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:3000/api/uploadthing/delete");
    }

    #[test]
    fn test_invalid_server_rejected() {
        assert!(ProxyDeleteClient::new("localhost without scheme", None).is_err());
    }
}
