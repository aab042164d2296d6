//! [`TriviaStore`] over a PostgreSQL pool.

use super::TriviaStore;
use crate::error::AppError;
use crate::models::{Category, NewQuestion, Question};
use async_trait::async_trait;
use sqlx::PgPool;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Escape LIKE metacharacters so the term matches literally (backslash is the escape character).
pub(crate) fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let sql = "SELECT id, type FROM categories ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Category>(sql).fetch_all(&self.pool).await?)
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, AppError> {
        let sql = "SELECT id, type FROM categories WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Category>(sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_category(&self, kind: &str) -> Result<i64, AppError> {
        let sql = "INSERT INTO categories (type) VALUES ($1) RETURNING id";
        tracing::debug!(sql = %sql, kind, "query");
        let (id,): (i64,) = sqlx::query_as(sql).bind(kind).fetch_one(&self.pool).await?;
        Ok(id)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        let sql = format!("SELECT {} FROM questions ORDER BY id", QUESTION_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as::<_, Question>(&sql).fetch_all(&self.pool).await?)
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        let sql = format!("SELECT {} FROM questions WHERE category = $1 ORDER BY id", QUESTION_COLUMNS);
        tracing::debug!(sql = %sql, category, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        let sql = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<i64, AppError> {
        let sql = "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id";
        tracing::debug!(sql = %sql, params = ?new, "query");
        let (id,): (i64,) = sqlx::query_as(sql)
            .bind(new.question.as_deref())
            .bind(new.answer.as_deref())
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM questions WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        Ok(done.rows_affected() > 0)
    }

    async fn count_questions(&self) -> Result<u64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(n).unwrap_or(0))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let sql = format!(
            r"SELECT {} FROM questions WHERE question ILIKE '%' || $1 || '%' ESCAPE '\' ORDER BY id",
            QUESTION_COLUMNS
        );
        tracing::debug!(sql = %sql, term, "query");
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(escape_like(term))
            .fetch_all(&self.pool)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("title"), "title");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }
}
