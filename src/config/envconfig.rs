use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Configuration assembled from `APP_`-prefixed environment variables.
///
/// Nested sections use a double underscore, so `APP_DATABASE__URL` lands in
/// `database.url` and `APP_AUTH__TOKEN_TTL_SECS` in `auth.token_ttl_secs`.
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_environment(Self::environment())
    }

    fn from_environment(environment: config_rs::Environment) -> Result<Self> {
        let settings = config_rs::Config::builder()
            .add_source(environment)
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
