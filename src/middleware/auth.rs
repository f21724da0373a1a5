use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use thiserror::Error;

use crate::{auth::UserId, error::AppError, services::ServiceContext, state::AppState};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthHeaderError {
    #[error("auth header is empty")]
    EmptyAuthHeader,
    #[error("invalid auth header")]
    InvalidAuthHeader,
    #[error("token is empty")]
    EmptyToken,
    #[error("failed to parse token")]
    FailedParseToken,
    #[error("user id not found")]
    UserNotFound,
    #[error("user id is of invalid type")]
    UserInvalidType,
}

/// Splits `Bearer <token>`. Exactly one space-separated token is accepted.
pub fn bearer_token(header: &str) -> Result<&str, AuthHeaderError> {
    if header.is_empty() {
        return Err(AuthHeaderError::EmptyAuthHeader);
    }

    let parts: Vec<&str> = header.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(AuthHeaderError::InvalidAuthHeader);
    }

    if parts[1].is_empty() {
        return Err(AuthHeaderError::EmptyToken);
    }

    Ok(parts[1])
}

/// Rejects the request with 401 unless it carries a valid bearer token,
/// then binds the token's user id for `CurrentUser`.
pub async fn require_user(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = {
        let header = match req.headers().get(header::AUTHORIZATION) {
            Some(value) => value
                .to_str()
                .map_err(|_| AuthHeaderError::InvalidAuthHeader)?,
            None => "",
        };
        let token = bearer_token(header)?;

        let services = ServiceContext::from_state(&state);
        services.auth(&state.tokens).validate(token).map_err(|err| {
            tracing::warn!(reason = %err, "rejected bearer token");
            AuthHeaderError::FailedParseToken
        })?
    };

    req.extensions_mut().insert(UserId(user_id));
    Ok(next.run(req).await)
}

/// Id of the authenticated user, as bound by `require_user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let UserId(id) = parts
            .extensions
            .get::<UserId>()
            .copied()
            .ok_or(AuthHeaderError::UserNotFound)?;

        // generated ids start at 1
        if id <= 0 {
            return Err(AuthHeaderError::UserInvalidType.into());
        }

        Ok(Self(id))
    }
}
