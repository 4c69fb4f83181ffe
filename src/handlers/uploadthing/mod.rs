pub mod complete;
pub mod delete;

pub use complete::upload_complete;
pub use delete::delete_image;
