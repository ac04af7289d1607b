// src/handlers/category.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde_json::{Map, Value, json};
use sqlx::SqlitePool;

use crate::{
    db, error::AppError, models::category::Category, pagination::paginate,
};

use super::question::PageParams;

/// Builds the `{id: type}` mapping the client expects for category listings.
pub fn category_map(categories: &[Category]) -> Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.category_type.clone())))
        .collect()
}

/// Lists all categories as an `{id: type}` mapping.
/// An empty store is a 404, matching the listing contract.
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let categories = db::categories::list_all(&pool).await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::from(e)
    })?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories stored".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "categories": category_map(&categories),
    })))
}

/// Lists the questions belonging to one category, paginated, together with
/// the whole-store question count and the category label.
pub async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.resolve()?;

    let category = db::categories::find_by_id(&pool, category_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up category {}: {:?}", category_id, e);
            AppError::BadRequest(e.to_string())
        })?
        .ok_or(AppError::NotFound(format!(
            "category {} does not exist",
            category_id
        )))?;

    let questions = db::questions::by_category(&pool, category_id)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch questions for category {}: {:?}",
                category_id,
                e
            );
            AppError::BadRequest(e.to_string())
        })?;

    let total_questions = db::questions::count(&pool)
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(json!({
        "success": true,
        "questions": paginate(page, &questions),
        "total_questions": total_questions,
        "current_category": category.category_type,
    })))
}
