//! In-process [`TriviaStore`] used by tests and `TRIVIA_STORE=memory` runs.

use super::TriviaStore;
use crate::error::AppError;
use crate::models::{Category, NewQuestion, Question};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    last_question_id: i64,
    last_category_id: i64,
}

/// Ids are assigned in increasing order and never reused, like a serial column.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with categories `1..=n` in the order given.
    pub fn with_categories<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tables = Tables::default();
        for kind in kinds {
            tables.last_category_id += 1;
            let id = tables.last_category_id;
            tables.categories.insert(id, Category { id, kind: kind.into() });
        }
        MemoryStore {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, AppError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn insert_category(&self, kind: &str) -> Result<i64, AppError> {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;
        let id = tables.last_category_id;
        tables.categories.insert(id, Category { id, kind: kind.to_string() });
        Ok(id)
    }

    async fn list_questions(&self) -> Result<Vec<Question>, AppError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.category == Some(category))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>, AppError> {
        Ok(self.tables.read().await.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<i64, AppError> {
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let id = tables.last_question_id;
        tables.questions.insert(id, new.clone().into_question(id));
        Ok(id)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }

    async fn count_questions(&self) -> Result<u64, AppError> {
        Ok(self.tables.read().await.questions.len() as u64)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let needle = term.to_lowercase();
        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| {
                q.question
                    .as_deref()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str, category: i64) -> NewQuestion {
        NewQuestion {
            question: Some(text.into()),
            answer: Some("a".into()),
            category: Some(category),
            difficulty: Some(1),
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let store = MemoryStore::new();
        let a = store.insert_question(&new_question("one", 1)).await.unwrap();
        let b = store.insert_question(&new_question("two", 1)).await.unwrap();
        assert!(store.delete_question(b).await.unwrap());
        let c = store.insert_question(&new_question("three", 1)).await.unwrap();
        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(store.count_questions().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_reports_false() {
        let store = MemoryStore::new();
        assert!(!store.delete_question(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_category_filter_and_order() {
        let store = MemoryStore::with_categories(["Science", "Art"]);
        store.insert_question(&new_question("s1", 1)).await.unwrap();
        store.insert_question(&new_question("a1", 2)).await.unwrap();
        store.insert_question(&new_question("s2", 1)).await.unwrap();
        let ids: Vec<i64> = store.questions_in_category(1).await.unwrap().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.get_category(2).await.unwrap().map(|c| c.kind), Some("Art".to_string()));
        assert!(store.get_category(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_literal() {
        let store = MemoryStore::new();
        store.insert_question(&new_question("Whose autobiography is entitled X?", 4)).await.unwrap();
        store.insert_question(&new_question("What is 2+2?", 1)).await.unwrap();
        store.insert_question(&new_question("100% sure?", 1)).await.unwrap();
        store.insert_question(&NewQuestion::default()).await.unwrap();

        let hits = store.search_questions("TITLE").await.unwrap();
        assert_eq!(hits.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1]);

        let hits = store.search_questions("%").await.unwrap();
        assert_eq!(hits.iter().map(|q| q.id).collect::<Vec<_>>(), vec![3]);
    }

    #[tokio::test]
    async fn test_insert_category() {
        let store = MemoryStore::with_categories(["Science"]);
        assert_eq!(store.insert_category("Art").await.unwrap(), 2);
        assert_eq!(store.list_categories().await.unwrap().len(), 2);
    }
}
