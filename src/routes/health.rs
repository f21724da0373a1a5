use axum::{Router, routing::get};

use crate::response::{ApiResult, StatusResponse};

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> ApiResult<StatusResponse> {
    StatusResponse::ok()
}
