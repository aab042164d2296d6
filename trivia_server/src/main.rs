//! Trivia API server.
//!
//! Run from repo root: `cargo run -p trivia-server`
//! With no database: `TRIVIA_STORE=memory SEED_CATEGORIES=true cargo run -p trivia-server`

use trivia_api::{
    app,
    apply_migrations,
    ensure_database_exists,
    seed_categories,
    AppConfig,
    AppState,
    MemoryStore,
    PgStore,
    StoreBackend,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trivia_api=info")),
        )
        .init();

    let state = match config.store {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(&config.database_url)
                .await?;
            apply_migrations(&pool).await?;
            AppState::new(PgStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            AppState::new(MemoryStore::new())
        }
    };

    if config.seed_categories {
        seed_categories(state.store.as_ref()).await?;
    }

    let router = app(state, config.max_body_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("trivia API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
