use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.max_connections == 0 {
            errors.push("database.max_connections must be > 0".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }
    }

    if let Some(auth) = cfg.auth.as_ref() {
        if auth.jwt_secret.trim().is_empty() {
            errors.push("auth.jwt_secret must not be empty".to_string());
        }

        if auth.token_ttl_secs == 0 {
            errors.push("auth.token_ttl_secs must be > 0".to_string());
        }
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, AuthConfig, DatabaseConfig};

    use super::validate;

    fn database(url: &str, max_connections: u32, min_idle: u32) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections,
            min_idle,
            connect_retries: 5,
            connect_cooldown_secs: 5,
        }
    }

    #[test]
    fn accepts_complete_config() {
        let cfg = AppConfig {
            database: Some(database("postgres://localhost/todo", 10, 2)),
            auth: Some(AuthConfig {
                jwt_secret: "secret".to_string(),
                token_ttl_secs: 60,
            }),
            ..Default::default()
        };

        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn reports_every_violation_at_once() {
        let cfg = AppConfig {
            database: Some(database(" ", 2, 5)),
            auth: Some(AuthConfig {
                jwt_secret: "".to_string(),
                token_ttl_secs: 0,
            }),
            ..Default::default()
        };

        let message = validate(&cfg).expect_err("config should be invalid").to_string();
        assert!(message.contains("database.url must not be empty"));
        assert!(message.contains("database.min_idle (5)"));
        assert!(message.contains("auth.jwt_secret must not be empty"));
        assert!(message.contains("auth.token_ttl_secs must be > 0"));
    }
}
