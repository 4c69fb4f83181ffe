use thiserror::Error;

/// Failures reported by the upload widget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{0}")]
    Provider(String),

    #[error("upload finished without any files")]
    NoFiles,
}

/// Failures of a user-initiated image deletion
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("no image is attached")]
    NoImage,

    #[error("storage provider did not confirm the deletion")]
    Rejected,

    #[error("delete request returned {status}")]
    Status { status: u16 },

    #[error("delete request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
