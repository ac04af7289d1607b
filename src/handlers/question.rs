// src/handlers/question.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    db,
    error::AppError,
    models::question::{CreateQuestionRequest, SearchRequest},
    pagination::paginate,
};

use super::category::category_map;

/// Query parameters for paginated question listings.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
}

impl PageParams {
    /// Resolves the 1-based page number, defaulting to the first page.
    /// The pagination contract takes a positive page, so 0 is rejected.
    pub fn resolve(&self) -> Result<usize, AppError> {
        match self.page {
            Some(0) => Err(AppError::BadRequest(
                "page must be a positive integer".to_string(),
            )),
            Some(page) => Ok(page),
            None => Ok(1),
        }
    }
}

/// Lists all questions, paginated, along with the category mapping and the
/// total question count. A page past the end of the listing is a 404.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.resolve()?;

    let questions = db::questions::list_all(&pool).await?;
    let total_questions = questions.len();
    let current_page = paginate(page, &questions);

    if current_page.is_empty() {
        return Err(AppError::NotFound(format!(
            "page {} holds no questions",
            page
        )));
    }

    let categories = db::categories::list_all(&pool).await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    Ok(Json(json!({
        "success": true,
        "questions": current_page,
        "total_questions": total_questions,
        "categories": category_map(&categories),
    })))
}

/// Deletes a question by id, returning the id and the new total count.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    db::questions::find_by_id(&pool, id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up question {}: {:?}", id, e);
            AppError::Unprocessable(e.to_string())
        })?
        .ok_or(AppError::NotFound(format!("question {} does not exist", id)))?;

    let removed = db::questions::delete(&pool, id).await.map_err(|e| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::Unprocessable(e.to_string())
    })?;

    // A concurrent delete may have won the race between lookup and delete.
    if removed == 0 {
        return Err(AppError::NotFound(format!("question {} does not exist", id)));
    }

    let total_questions = db::questions::count(&pool)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "deleted": id,
        "total_questions": total_questions,
    })))
}

/// POST `/questions`: creates a question, or searches when the payload
/// carries a non-null `searchTerm`.
///
/// The payload-shape dispatch is the contract the web client already speaks;
/// both modes delegate to the named operations below. A `searchTerm` of JSON
/// null counts as absent and falls through to create mode.
pub async fn create_or_search(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    if body.get("searchTerm").is_some_and(|v| !v.is_null()) {
        let req: SearchRequest = serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        search_questions(&pool, &params, &req).await
    } else {
        let req: CreateQuestionRequest = serde_json::from_value(body)
            .map_err(|e| AppError::BadRequest(format!("invalid create payload: {}", e)))?;
        create_question(&pool, &params, &req).await
    }
}

/// POST `/search`: substring search over question prompts.
pub async fn search(
    State(pool): State<SqlitePool>,
    Query(params): Query<PageParams>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let req: SearchRequest =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    search_questions(&pool, &params, &req).await
}

/// Runs the case-insensitive substring search and paginates the matches.
/// No match is a success with an empty page, not a 404. `total_questions`
/// counts the returned page, not every match.
async fn search_questions(
    pool: &SqlitePool,
    params: &PageParams,
    req: &SearchRequest,
) -> Result<Json<Value>, AppError> {
    let page = params.resolve()?;

    let matches = db::questions::search(pool, &req.search_term)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Unprocessable(e.to_string())
        })?;

    let page_questions = paginate(page, &matches);

    Ok(Json(json!({
        "success": true,
        "questions": page_questions,
        "total_questions": page_questions.len(),
    })))
}

/// Validates and inserts a new question, then returns the requested page of
/// the refreshed listing along with the assigned id.
async fn create_question(
    pool: &SqlitePool,
    params: &PageParams,
    req: &CreateQuestionRequest,
) -> Result<Json<Value>, AppError> {
    if let Err(validation_errors) = req.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let page = params.resolve()?;

    let id = db::questions::create(pool, req).await.map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    let questions = db::questions::list_all(pool)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;
    let total_questions = questions.len();

    Ok(Json(json!({
        "success": true,
        "created": id,
        "question_created": req.question,
        "questions": paginate(page, &questions),
        "total_questions": total_questions,
    })))
}
