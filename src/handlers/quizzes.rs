//! Quiz play.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::QuizRequest;
use crate::response::QuizBody;
use crate::service::TriviaService;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /quizzes — `{previous_questions, quiz_category: {id}}`. A `null` question ends the quiz.
pub async fn play_quiz(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<QuizRequest>,
) -> Result<Json<QuizBody>, AppError> {
    let question = TriviaService::play_quiz(state.store.as_ref(), &body).await?;
    Ok(Json(QuizBody { success: true, question }))
}
