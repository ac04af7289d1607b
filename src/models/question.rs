// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
///
/// Serializes one-to-one as the formatted question the API returns:
/// `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The prompt text shown to the player.
    pub question: String,

    /// The correct answer text.
    pub answer: String,

    /// Foreign key referencing `categories.id`.
    pub category: i64,

    /// Difficulty rating. An opaque ordinal with no enforced range.
    pub difficulty: i64,
}

/// DTO for creating a new question. All fields are required.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    pub question: String,
    #[validate(length(min = 1, max = 500))]
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// DTO for searching questions by a substring of their prompt.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}
