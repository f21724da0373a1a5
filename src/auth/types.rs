use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // user id
    pub iat: usize,
    pub exp: usize,
}

/// Authenticated user id, bound into request extensions by `require_user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i32);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("token has expired")]
    TokenExpired,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token is malformed")]
    TokenMalformed,
    #[error("token signing failed: {0}")]
    TokenSigning(String),
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}
