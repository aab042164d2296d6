//! Trivia operations over any [`TriviaStore`]. Handlers only extract input and shape envelopes.

use crate::error::AppError;
use crate::models::{category_map, Category, CategoryMap, NewQuestion, Question, QuizRequest};
use crate::pagination::{paginate, QUESTIONS_PER_PAGE};
use crate::quiz::pick_unseen;
use crate::store::TriviaStore;

/// One page of the id-ordered question list.
#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Across all pages.
    pub total_questions: u64,
    pub categories: CategoryMap,
}

pub struct TriviaService;

impl TriviaService {
    pub async fn categories(store: &dyn TriviaStore) -> Result<CategoryMap, AppError> {
        let categories = store.list_categories().await?;
        Ok(category_map(&categories))
    }

    /// An empty page (empty store, page past the end, page < 1) is NotFound.
    pub async fn question_page(store: &dyn TriviaStore, page: i64) -> Result<QuestionPage, AppError> {
        let all = store.list_questions().await?;
        let current = paginate(&all, page, QUESTIONS_PER_PAGE);
        if current.is_empty() {
            return Err(AppError::NotFound(format!("question page {}", page)));
        }
        let questions = current.to_vec();
        let categories = Self::categories(store).await?;
        Ok(QuestionPage {
            questions,
            total_questions: all.len() as u64,
            categories,
        })
    }

    /// Removes the question and returns the remaining total.
    pub async fn delete_question(store: &dyn TriviaStore, id: i64) -> Result<u64, AppError> {
        if store.get_question(id).await?.is_none() {
            return Err(AppError::NotFound(format!("question {}", id)));
        }
        if !store.delete_question(id).await? {
            // Removed by a concurrent request between the lookup and the delete.
            return Err(AppError::NotFound(format!("question {}", id)));
        }
        tracing::info!(question_id = id, "question deleted");
        store.count_questions().await
    }

    /// Persistence failures (constraint violations included) are reported as Unprocessable.
    pub async fn create_question(store: &dyn TriviaStore, new: NewQuestion) -> Result<i64, AppError> {
        let id = store.insert_question(&new).await.map_err(|e| {
            tracing::warn!(error = %e, "question insert failed");
            AppError::Unprocessable(format!("could not create question: {}", e))
        })?;
        tracing::info!(question_id = id, "question created");
        Ok(id)
    }

    /// Every match over the whole corpus, unpaginated.
    pub async fn search(store: &dyn TriviaStore, term: &str) -> Result<Vec<Question>, AppError> {
        let questions = store.search_questions(term).await?;
        tracing::debug!(term, matches = questions.len(), "search");
        Ok(questions)
    }

    pub async fn questions_for_category(
        store: &dyn TriviaStore,
        category_id: i64,
    ) -> Result<(Category, Vec<Question>), AppError> {
        let category = store
            .get_category(category_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("category {}", category_id)))?;
        let questions = store.questions_in_category(category.id).await?;
        Ok((category, questions))
    }

    /// Random question from the requested category (or all, for id 0) not in `previous_questions`.
    /// `None` means the quiz is over.
    pub async fn play_quiz(store: &dyn TriviaStore, req: &QuizRequest) -> Result<Option<Question>, AppError> {
        let candidates = match req.quiz_category.filter() {
            Some(category) => store.questions_in_category(category).await?,
            None => store.list_questions().await?,
        };
        let picked = pick_unseen(&candidates, &req.previous_questions, &mut rand::thread_rng()).cloned();
        tracing::debug!(
            candidates = candidates.len(),
            previous = req.previous_questions.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "quiz pick"
        );
        Ok(picked)
    }
}
