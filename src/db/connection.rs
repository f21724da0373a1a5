use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::DatabaseConfig;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Connects with bounded retries, then syncs the schema from the registered entities.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_retry(cfg).await?;

    if is_sqlite(&cfg.url) {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }

    info!("syncing database schema from entities");
    db.get_schema_registry("todo_server::db::entities::*")
        .sync(&db)
        .await
        .context("failed to sync database schema")?;
    Ok(db)
}

async fn connect_with_retry(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .sqlx_logging(false);

    let mut attempt = 0;
    loop {
        match Database::connect(options.clone()).await {
            Ok(db) => {
                info!(attempt, "connected to database");
                return Ok(db);
            }
            Err(err) if attempt < cfg.connect_retries => {
                attempt += 1;
                warn!(
                    attempt,
                    retries = cfg.connect_retries,
                    cooldown_secs = cfg.connect_cooldown_secs,
                    error = %err,
                    "database connection failed, retrying"
                );
                tokio::time::sleep(Duration::from_secs(cfg.connect_cooldown_secs)).await;
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to connect to database after {attempt} retries")
                });
            }
        }
    }
}

fn is_sqlite(url: &str) -> bool {
    url.trim().to_ascii_lowercase().starts_with("sqlite:")
}
