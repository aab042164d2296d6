//! Runtime configuration types.

use std::net::SocketAddr;

/// Which [`crate::store::TriviaStore`] implementation backs the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    /// In-process store; state is lost on restart.
    Memory,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub store: StoreBackend,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    /// Upper bound on request bodies, in bytes.
    pub max_body_bytes: usize,
    /// Insert the default categories when the category table is empty.
    pub seed_categories: bool,
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/trivia";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const DEFAULT_LOG_FILTER: &str = "trivia_api=info,tower_http=info";
