//! Question handlers: paginated listing, create, delete, search.

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::models::{NewQuestion, SearchRequest};
use crate::pagination::PageQuery;
use crate::response::{
    CreatedBody, DeletedBody, QuestionListBody, QuestionPageBody, LISTING_CURRENT_CATEGORY, SEARCH_CURRENT_CATEGORY,
};
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{
    extract::{RawQuery, State},
    Json,
};

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<QuestionPageBody>, AppError> {
    let page = PageQuery::from_raw(query.as_deref()).page();
    let page = TriviaService::question_page(state.store.as_ref(), page).await?;
    Ok(Json(QuestionPageBody {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
        categories: page.categories,
        current_category: LISTING_CURRENT_CATEGORY,
    }))
}

/// DELETE /questions/:question_id
pub async fn delete_question(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<DeletedBody>, AppError> {
    let total_questions = TriviaService::delete_question(state.store.as_ref(), id).await?;
    Ok(Json(DeletedBody {
        success: true,
        total_questions,
        deleted: id,
    }))
}

/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewQuestion>,
) -> Result<Json<CreatedBody>, AppError> {
    let created = TriviaService::create_question(state.store.as_ref(), body).await?;
    Ok(Json(CreatedBody { success: true, created }))
}

/// POST /search — `{searchTerm}`; a missing term is Unprocessable.
pub async fn search_questions(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<QuestionListBody>, AppError> {
    let questions = TriviaService::search(state.store.as_ref(), &body.search_term).await?;
    Ok(Json(QuestionListBody::new(questions, SEARCH_CURRENT_CATEGORY)))
}
