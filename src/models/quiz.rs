// src/models/quiz.rs

use serde::Deserialize;

/// DTO for requesting the next question of a quiz round.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids of the questions already served this round.
    pub previous_questions: Vec<i64>,

    pub quiz_category: QuizCategory,
}

/// Category selector inside a quiz request. An `id` of 0 means the round
/// draws from every category.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,

    #[serde(rename = "type")]
    pub category_type: Option<String>,
}
