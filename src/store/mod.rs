//! Data access for questions and categories, plus Postgres bootstrap helpers.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::models::{Category, NewQuestion, Question};
use async_trait::async_trait;
use sqlx::ConnectOptions;
use std::str::FromStr;

/// Everything the handlers need from persistence. Each call is a single statement; no
/// transaction spans two calls.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;
    async fn get_category(&self, id: i64) -> Result<Option<Category>, AppError>;
    /// Returns the new category id.
    async fn insert_category(&self, kind: &str) -> Result<i64, AppError>;

    /// All questions, id ascending.
    async fn list_questions(&self) -> Result<Vec<Question>, AppError>;
    /// Questions whose category equals `category`, id ascending.
    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError>;
    async fn get_question(&self, id: i64) -> Result<Option<Question>, AppError>;
    /// Returns the new question id.
    async fn insert_question(&self, new: &NewQuestion) -> Result<i64, AppError>;
    /// `true` when a row was removed.
    async fn delete_question(&self, id: i64) -> Result<bool, AppError>;
    async fn count_questions(&self) -> Result<u64, AppError>;
    /// Case-insensitive literal substring match on the question text, id ascending.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError>;
}

/// Create the database named in `database_url` if it does not exist (connects to `postgres` on the same server).
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::Internal(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::Internal("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
