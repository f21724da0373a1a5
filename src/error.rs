use crate::{auth::AuthError, db::dao::DaoLayerError, middleware::AuthHeaderError};

pub const SERVICE_FAILURE: &str = "service failure";

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Logs `detail` and hides it behind the generic failure message.
    pub fn service_failure(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "service failure");
        Self::Internal(SERVICE_FAILURE.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::EmptyUpdate { .. } => {
                AppError::bad_request(crate::services::EMPTY_UPDATE_MESSAGE)
            }
            DaoLayerError::Db(_) => AppError::service_failure(err),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::SignatureInvalid
            | AuthError::TokenMalformed => AppError::unauthorized(err.to_string()),
            AuthError::TokenSigning(_) | AuthError::PasswordHash(_) => {
                AppError::service_failure(err)
            }
        }
    }
}

impl From<AuthHeaderError> for AppError {
    fn from(err: AuthHeaderError) -> Self {
        match err {
            AuthHeaderError::UserNotFound | AuthHeaderError::UserInvalidType => {
                AppError::internal(err.to_string())
            }
            _ => AppError::unauthorized(err.to_string()),
        }
    }
}
