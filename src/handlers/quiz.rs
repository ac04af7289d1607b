// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};
use rand::seq::IndexedRandom;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::{db, error::AppError, models::quiz::QuizRequest};

/// Sentinel category id meaning "draw from every category".
const ALL_CATEGORIES: i64 = 0;

/// Serves the next quiz question.
///
/// * Computes the candidate set: questions not yet asked this round,
///   restricted to the requested category unless the "all" sentinel is given.
/// * Draws one candidate uniformly at random. The draw is unseeded and
///   memoryless, so identical requests may return different questions.
/// * An exhausted candidate set yields `question: null`, not an error;
///   the round is simply over.
pub async fn play_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let req: QuizRequest = serde_json::from_value(body)
        .map_err(|e| AppError::Unprocessable(format!("malformed quiz payload: {}", e)))?;

    let category_id = match req.quiz_category.id {
        ALL_CATEGORIES => None,
        id => Some(id),
    };

    let candidates = db::questions::excluding(&pool, &req.previous_questions, category_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch quiz candidates: {:?}", e);
            AppError::Unprocessable(e.to_string())
        })?;

    let next_question = candidates.choose(&mut rand::rng());

    Ok(Json(json!({
        "success": true,
        "question": next_question,
    })))
}
