use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};

use crate::{
    response::{ApiResult, IdResponse},
    services::{ServiceContext, auth_service::SignUpInput},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/sign-up", post(sign_up))
        .route("/auth/sign-in", post(sign_in))
        .with_state(state)
}

async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignUpRequest>,
) -> ApiResult<IdResponse> {
    let services = ServiceContext::from_state(state.as_ref());
    let id = services.auth(&state.tokens).sign_up(body.into()).await?;
    Ok(Json(IdResponse { id }))
}

async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SignInRequest>,
) -> ApiResult<TokenResponse> {
    let services = ServiceContext::from_state(state.as_ref());
    let token = services
        .auth(&state.tokens)
        .issue(&body.username, &body.password)
        .await?;
    Ok(Json(TokenResponse { token }))
}

impl From<SignUpRequest> for SignUpInput {
    fn from(body: SignUpRequest) -> Self {
        Self {
            name: body.name,
            username: body.username,
            password: body.password,
        }
    }
}
