//! Trivia API routes.

use crate::handlers::{
    create_question, delete_question, list_categories, list_questions, method_not_allowed, play_quiz,
    questions_for_category, search_questions,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

/// Every route answers unhandled methods (PATCH included) with the 405 envelope.
pub fn trivia_routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories).fallback(method_not_allowed))
        .route(
            "/categories/:category_id/questions",
            get(questions_for_category).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(list_questions).post(create_question).fallback(method_not_allowed),
        )
        .route("/questions/:question_id", delete(delete_question).fallback(method_not_allowed))
        .route("/search", post(search_questions).fallback(method_not_allowed))
        .route("/quizzes", post(play_quiz).fallback(method_not_allowed))
        .with_state(state)
}
