//! HTTP handlers: one per endpoint.

pub mod categories;
pub mod questions;
pub mod quizzes;
pub use categories::*;
pub use questions::*;
pub use quizzes::*;

use crate::error::AppError;

/// Router fallback: unknown paths get the standard 404 envelope.
pub async fn not_found() -> AppError {
    AppError::NotFound("no such route".into())
}

/// Per-route method fallback: a known path with an unhandled method gets the 405 envelope.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
