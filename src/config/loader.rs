//! Load [`AppConfig`] from the process environment (after `.env`) or any key lookup.

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

impl AppConfig {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`; missing keys take their defaults, malformed values fail.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let store = match get("TRIVIA_STORE") {
            Some(v) => parse_backend(&v)?,
            None => StoreBackend::Postgres,
        };
        let bind_addr: SocketAddr = parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR.parse().ok())?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), Some(DEFAULT_MAX_CONNECTIONS))?;
        let max_body_bytes = parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), Some(DEFAULT_MAX_BODY_BYTES))?;
        let seed_categories = match get("SEED_CATEGORIES") {
            Some(v) => parse_bool("SEED_CATEGORIES", &v)?,
            None => false,
        };

        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            store,
            bind_addr,
            db_max_connections,
            max_body_bytes,
            seed_categories,
            log_filter: get("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        // Every key has a valid default, so an empty lookup cannot fail.
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            store: StoreBackend::Postgres,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            db_max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            seed_categories: false,
            log_filter: DEFAULT_LOG_FILTER.into(),
        }
    }
}

fn parse_backend(v: &str) -> Result<StoreBackend, ConfigError> {
    match v.to_ascii_lowercase().as_str() {
        "postgres" | "pg" => Ok(StoreBackend::Postgres),
        "memory" | "mem" => Ok(StoreBackend::Memory),
        _ => Err(ConfigError::UnknownBackend(v.to_string())),
    }
}

fn parse_bool(key: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value: v.to_string() }),
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: Option<T>) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue { key, value: v }),
        None => default.ok_or(ConfigError::InvalidValue { key, value: String::new() }),
    }
}
