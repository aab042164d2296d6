//! Stored entities and the request payloads that create or select them.

use crate::deserializers::{lenient_i64, lenient_opt_i64};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trivia question. Serializes to the formatted record `{id, question, answer, category, difficulty}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: Option<String>,
    pub answer: Option<String>,
    /// Weak reference to [`Category::id`]; may dangle.
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

/// POST /questions body. No field is required.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub difficulty: Option<i64>,
}

impl NewQuestion {
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Category id (as a string key) to display label.
pub type CategoryMap = BTreeMap<String, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories.iter().map(|c| (c.id.to_string(), c.kind.clone())).collect()
}

/// POST /search body.
#[derive(Clone, Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// POST /quizzes body.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuizCategory {
    /// `0` selects every category.
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
}

impl QuizCategory {
    pub const ALL: i64 = 0;

    /// Category filter for the candidate set, `None` for all categories.
    pub fn filter(&self) -> Option<i64> {
        (self.id != Self::ALL).then_some(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_question_formatted_record() {
        let q = Question {
            id: 3,
            question: Some("What is 2+2?".into()),
            answer: Some("4".into()),
            category: Some(1),
            difficulty: Some(2),
        };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({"id": 3, "question": "What is 2+2?", "answer": "4", "category": 1, "difficulty": 2})
        );
    }

    #[test]
    fn test_new_question_accepts_partial_and_string_numbers() {
        let nq: NewQuestion = serde_json::from_value(json!({"question": "Q?", "category": "5"})).unwrap();
        assert_eq!(nq.question.as_deref(), Some("Q?"));
        assert_eq!(nq.answer, None);
        assert_eq!(nq.category, Some(5));
        assert_eq!(nq.difficulty, None);

        let empty: NewQuestion = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, NewQuestion::default());
    }

    #[test]
    fn test_category_serializes_type_key() {
        let c = Category { id: 1, kind: "Science".into() };
        assert_eq!(serde_json::to_value(&c).unwrap(), json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn test_category_map_keys_are_strings() {
        let map = category_map(&[
            Category { id: 2, kind: "Art".into() },
            Category { id: 10, kind: "Sports".into() },
        ]);
        assert_eq!(map.get("2").map(String::as_str), Some("Art"));
        assert_eq!(map.get("10").map(String::as_str), Some("Sports"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_search_request_requires_term() {
        assert!(serde_json::from_value::<SearchRequest>(json!({})).is_err());
        assert!(serde_json::from_value::<SearchRequest>(json!({"searchTerm": null})).is_err());
        let r: SearchRequest = serde_json::from_value(json!({"searchTerm": "title"})).unwrap();
        assert_eq!(r.search_term, "title");
    }

    #[test]
    fn test_quiz_category_filter() {
        let all: QuizRequest =
            serde_json::from_value(json!({"previous_questions": [], "quiz_category": {"id": 0}})).unwrap();
        assert_eq!(all.quiz_category.filter(), None);

        let one: QuizRequest = serde_json::from_value(
            json!({"previous_questions": [1, 2], "quiz_category": {"type": "Art", "id": "2"}}),
        )
        .unwrap();
        assert_eq!(one.quiz_category.filter(), Some(2));
        assert_eq!(one.previous_questions, vec![1, 2]);
    }

    #[test]
    fn test_quiz_request_requires_category() {
        assert!(serde_json::from_value::<QuizRequest>(json!({"previous_questions": []})).is_err());
    }
}
