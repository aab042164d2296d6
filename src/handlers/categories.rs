//! Category handlers.

use crate::error::AppError;
use crate::extractors::PathId;
use crate::response::{CategoriesBody, QuestionListBody};
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /categories — every category as `{id: type}`.
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesBody>, AppError> {
    let categories = TriviaService::categories(state.store.as_ref()).await?;
    Ok(Json(CategoriesBody {
        success: true,
        categories,
    }))
}

/// GET /categories/:category_id/questions — all questions of one category, unpaginated.
pub async fn questions_for_category(
    State(state): State<AppState>,
    PathId(category_id): PathId,
) -> Result<Json<QuestionListBody>, AppError> {
    let (category, questions) = TriviaService::questions_for_category(state.store.as_ref(), category_id).await?;
    Ok(Json(QuestionListBody::new(questions, category.kind)))
}
