mod auth;
mod json_error;
mod panic;

pub use auth::{AuthHeaderError, CurrentUser, bearer_token, require_user};
pub use json_error::json_error_middleware;
pub use panic::catch_panic_layer;
