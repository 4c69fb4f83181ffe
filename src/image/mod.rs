// image - per-form image lifecycle: upload completion, deletion, toasts

pub mod client;
pub mod error;
pub mod lifecycle;
pub mod toast;

pub use client::ProxyDeleteClient;
pub use error::{DeleteError, UploadError};
pub use lifecycle::{image_key, ImageDeleter, ImageManager, ImageState, ImageStatus, UploadedFile};
pub use toast::{Toast, ToastVariant, Toaster};
