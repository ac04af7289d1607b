// src/db/categories.rs

use sqlx::SqlitePool;

use crate::models::category::Category;

/// Fetches all categories ordered by id.
pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type
        FROM categories
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fetches a single category by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, type
        FROM categories
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
