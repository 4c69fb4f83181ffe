pub mod auth;
pub mod response;

pub use auth::{identify_caller_middleware, AuthUser, CurrentUser};
pub use response::{ApiResponse, ApiResult};
