//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DatabaseConfig::DEFAULT_URL.into());

        let database = DatabaseConfig {
            max_connections: parse_var("DB_MAX_CONNECTIONS", 1),
            min_connections: parse_var("DB_MIN_CONNECTIONS", 1),
            log_statements: parse_var("DB_LOG_STATEMENTS", false),
            ..DatabaseConfig::new(url)
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 3000),
            database,
        }
    }
}

/// Read and parse `key`, falling back to `default` when unset or malformed.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
