use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use super::error::{DeleteError, UploadError};
use super::toast::Toaster;
use crate::storage::DeleteFilesResult;

/// Storage key of an uploaded file: everything after the last `/` of its URL
pub fn image_key(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[idx + 1..],
        None => url,
    }
}

/// Whatever carries a deletion to the storage provider (normally the proxy endpoint)
#[async_trait]
pub trait ImageDeleter: Send + Sync {
    async fn delete_image(&self, image_key: &str) -> Result<DeleteFilesResult, DeleteError>;
}

/// One entry of the upload widget's completion payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub url: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    Empty,
    Uploading,
    Present,
    Deleting,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageState {
    url: Option<String>,
    is_deleting: bool,
    is_uploading: bool,
}

impl ImageState {
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    pub fn status(&self) -> ImageStatus {
        if self.is_deleting {
            ImageStatus::Deleting
        } else if self.is_uploading {
            ImageStatus::Uploading
        } else if self.url.is_some() {
            ImageStatus::Present
        } else {
            ImageStatus::Empty
        }
    }
}

/// Holds `is_deleting` for the duration of a deletion call; released on drop,
/// including when the deletion future is abandoned mid-flight.
struct InFlight<'a> {
    state: &'a mut ImageState,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a mut ImageState) -> Self {
        state.is_deleting = true;
        Self { state }
    }
}

impl Deref for InFlight<'_> {
    type Target = ImageState;

    fn deref(&self) -> &ImageState {
        self.state
    }
}

impl DerefMut for InFlight<'_> {
    fn deref_mut(&mut self) -> &mut ImageState {
        self.state
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.is_deleting = false;
    }
}

/// Image state machine for one form session:
/// `empty -> uploading -> present -> deleting -> empty`
#[derive(Debug)]
pub struct ImageManager {
    state: ImageState,
    toaster: Toaster,
}

impl ImageManager {
    /// `initial` seeds the state from a persisted listing; an empty string counts as no image
    pub fn new(initial: Option<String>, toaster: Toaster) -> Self {
        Self {
            state: ImageState {
                url: initial.filter(|url| !url.is_empty()),
                ..ImageState::default()
            },
            toaster,
        }
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn url(&self) -> Option<&str> {
        self.state.url()
    }

    pub fn status(&self) -> ImageStatus {
        self.state.status()
    }

    /// The upload widget started sending a file
    pub fn begin_upload(&mut self) {
        self.state.is_uploading = true;
    }

    /// Completion callback of the upload widget; the first file becomes the image
    pub fn upload_complete(&mut self, files: &[UploadedFile]) -> Result<String, UploadError> {
        let Some(file) = files.first() else {
            return Err(self.upload_failed(UploadError::NoFiles.to_string()));
        };

        tracing::info!("Image uploaded: {}", file.url);
        self.state.is_uploading = false;
        self.state.url = Some(file.url.clone());
        self.toaster.success("Image uploaded.");

        Ok(file.url.clone())
    }

    /// Error callback of the upload widget; the current image is left as is
    pub fn upload_failed(&mut self, message: impl Into<String>) -> UploadError {
        let message = message.into();
        tracing::warn!("Image upload failed: {}", message);
        self.state.is_uploading = false;
        self.toaster.destructive(format!("Upload failed. {}", message));
        UploadError::Provider(message)
    }

    /// Delete the attached image through `deleter`.
    ///
    /// The URL is cleared only when the provider confirms with `success: true`;
    /// every other outcome keeps it and raises a destructive toast.
    pub async fn delete(&mut self, deleter: &dyn ImageDeleter) -> Result<DeleteFilesResult, DeleteError> {
        let Some(url) = self.state.url.clone() else {
            return Err(DeleteError::NoImage);
        };
        let key = image_key(&url).to_string();

        let mut flight = InFlight::begin(&mut self.state);

        match deleter.delete_image(&key).await {
            Ok(result) if result.success => {
                flight.url = None;
                tracing::info!("Image deleted: {}", key);
                self.toaster.success("Image deleted.");
                Ok(result)
            }
            Ok(_) => {
                tracing::warn!("Storage provider refused to delete {}", key);
                self.toaster.destructive("Something went wrong !.");
                Err(DeleteError::Rejected)
            }
            Err(e) => {
                tracing::warn!("Image deletion failed for {}: {}", key, e);
                self.toaster.destructive("Something went wrong !.");
                Err(e)
            }
        }
    }
}
