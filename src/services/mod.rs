pub mod auth_service;
pub mod context;
pub mod todo_item_service;
pub mod todo_list_service;

pub use context::ServiceContext;

use crate::error::AppError;

pub const EMPTY_UPDATE_MESSAGE: &str = "update structure has no values";
pub const EMPTY_TITLE_MESSAGE: &str = "title must not be empty";

pub(crate) fn require_non_blank(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(message));
    }
    Ok(())
}

/// Shape check shared by list and item updates.
pub(crate) fn validate_update(is_empty: bool, title: Option<&str>) -> Result<(), AppError> {
    if is_empty {
        return Err(AppError::bad_request(EMPTY_UPDATE_MESSAGE));
    }
    if let Some(title) = title {
        require_non_blank(title, EMPTY_TITLE_MESSAGE)?;
    }
    Ok(())
}
