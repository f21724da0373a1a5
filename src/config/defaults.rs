pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: i64 = 8000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 10;
pub const DEFAULT_DB_MIN_IDLE: i64 = 2;
pub const DEFAULT_DB_CONNECT_RETRIES: i64 = 5;
pub const DEFAULT_DB_CONNECT_COOLDOWN_SECS: i64 = 5;
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 12 * 60 * 60;
