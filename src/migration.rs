//! Table DDL for the trivia schema and the default category seed.

use crate::error::AppError;
use crate::store::TriviaStore;
use sqlx::PgPool;

/// Categories a fresh deployment starts with, in id order.
pub const DEFAULT_CATEGORIES: &[&str] = &["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

/// `questions.category` carries no foreign key: a question may reference a category that does not exist.
const TABLES: &[(&str, &str)] = &[
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGSERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    ),
    (
        "questions",
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id BIGSERIAL PRIMARY KEY,
            question TEXT,
            answer TEXT,
            category BIGINT,
            difficulty BIGINT
        )
        "#,
    ),
];

/// Create the `categories` and `questions` tables. Idempotent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    for (table, ddl) in TABLES {
        tracing::debug!(table, "ensure table");
        sqlx::query(ddl).execute(pool).await?;
    }
    sqlx::query("CREATE INDEX IF NOT EXISTS questions_category_idx ON questions (category)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert [`DEFAULT_CATEGORIES`] when the store has no categories. Returns how many were inserted.
pub async fn seed_categories(store: &dyn TriviaStore) -> Result<usize, AppError> {
    if !store.list_categories().await?.is_empty() {
        return Ok(0);
    }
    for kind in DEFAULT_CATEGORIES {
        store.insert_category(kind).await?;
    }
    tracing::info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(DEFAULT_CATEGORIES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_seed_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(seed_categories(&store).await.unwrap(), DEFAULT_CATEGORIES.len());
        let categories = store.list_categories().await.unwrap();
        assert_eq!(categories[3].id, 4);
        assert_eq!(categories[3].kind, "History");
    }

    #[tokio::test]
    async fn test_seed_skips_existing() {
        let store = MemoryStore::with_categories(["Custom"]);
        assert_eq!(seed_categories(&store).await.unwrap(), 0);
        assert_eq!(store.list_categories().await.unwrap().len(), 1);
    }
}
