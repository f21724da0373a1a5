use std::sync::Arc;

use axum::{Router, middleware};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod items;
pub mod lists;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router(state.clone()))
        .merge(lists::router(state.clone()))
        .merge(items::router(state))
}

/// Full route tree with the error envelope and panic layers applied.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
