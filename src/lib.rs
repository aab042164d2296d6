//! Trivia API: questions, categories, search and quiz play over a relational store.

pub mod config;
pub mod deserializers;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreBackend};
pub use error::{AppError, ConfigError};
pub use migration::{apply_migrations, seed_categories};
pub use models::{Category, NewQuestion, Question};
pub use routes::{app, common_routes_with_ready, trivia_routes};
pub use service::TriviaService;
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryStore, PgStore, TriviaStore};
