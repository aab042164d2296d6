//! Success envelopes. Every body carries `success: true`; failures use [`crate::error::ErrorBody`].

use crate::models::{CategoryMap, Question};
use serde::Serialize;

/// `current_category` reported by the paginated listing. Not derived from the data.
pub const LISTING_CURRENT_CATEGORY: &str = "History";
/// `current_category` reported by search. Not derived from the data.
pub const SEARCH_CURRENT_CATEGORY: &str = "currentCategory";

#[derive(Serialize, Debug)]
pub struct CategoriesBody {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Serialize, Debug)]
pub struct QuestionPageBody {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: CategoryMap,
    pub current_category: &'static str,
}

#[derive(Serialize, Debug)]
pub struct DeletedBody {
    pub success: bool,
    pub total_questions: u64,
    pub deleted: i64,
}

#[derive(Serialize, Debug)]
pub struct CreatedBody {
    pub success: bool,
    pub created: i64,
}

/// Search and per-category listings share this shape.
#[derive(Serialize, Debug)]
pub struct QuestionListBody {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: String,
}

impl QuestionListBody {
    pub fn new(questions: Vec<Question>, current_category: impl Into<String>) -> Self {
        QuestionListBody {
            success: true,
            total_questions: questions.len() as u64,
            questions,
            current_category: current_category.into(),
        }
    }
}

/// `question` is `null` once the quiz has run out of questions.
#[derive(Serialize, Debug)]
pub struct QuizBody {
    pub success: bool,
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quiz_body_null_question() {
        let body = QuizBody { success: true, question: None };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"success": true, "question": null}));
    }

    #[test]
    fn test_question_list_counts() {
        let q = Question { id: 1, question: None, answer: None, category: None, difficulty: None };
        let body = QuestionListBody::new(vec![q.clone(), Question { id: 2, ..q }], "Art");
        assert_eq!(body.total_questions, 2);
        assert_eq!(body.current_category, "Art");
        assert!(body.success);
    }
}
