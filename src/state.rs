use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::TokenSigner, config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub tokens: TokenSigner,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection, tokens: TokenSigner) -> Arc<Self> {
        Arc::new(Self { config, db, tokens })
    }
}
