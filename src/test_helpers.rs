//! Builders for router and service tests: a mock-backed state for paths that
//! never reach the database, and an in-memory SQLite state for full flows.
use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseBackend, MockDatabase};

use crate::{
    auth::TokenSigner,
    config::{AppConfig, AuthConfig, DatabaseConfig},
    db::connection,
    routes,
    state::AppState,
};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
const TEST_TOKEN_TTL_SECS: u64 = 3600;

pub fn test_config(database_url: &str) -> AppConfig {
    AppConfig {
        database: Some(DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 1,
            min_idle: 1,
            connect_retries: 0,
            connect_cooldown_secs: 0,
        }),
        auth: Some(AuthConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            token_ttl_secs: TEST_TOKEN_TTL_SECS,
        }),
        ..Default::default()
    }
}

pub fn test_signer() -> TokenSigner {
    TokenSigner::new(TEST_JWT_SECRET.as_bytes(), TEST_TOKEN_TTL_SECS)
}

/// `Authorization` header value for `user_id`, signed with the test secret.
pub fn bearer_for(user_id: i32) -> String {
    let token = test_signer().issue(user_id).expect("encode token");
    format!("Bearer {token}")
}

pub fn mock_state() -> Arc<AppState> {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    AppState::new(test_config("postgres://mock"), db, test_signer())
}

pub async fn sqlite_state() -> anyhow::Result<Arc<AppState>> {
    let cfg = test_config("sqlite::memory:");
    let db = connection::connect(cfg.database()?).await?;
    Ok(AppState::new(cfg, db, test_signer()))
}

pub fn test_app(state: Arc<AppState>) -> Router {
    routes::app(state)
}

pub async fn sqlite_app() -> anyhow::Result<(Router, Arc<AppState>)> {
    let state = sqlite_state().await?;
    Ok((test_app(Arc::clone(&state)), state))
}
