//! TriviaService: the operations behind each endpoint.

mod trivia;
pub use trivia::{QuestionPage, TriviaService};
