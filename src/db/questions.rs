// src/db/questions.rs

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::question::{CreateQuestionRequest, Question};

/// Fetches every question ordered by id.
pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fetches a single question by id.
pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Substring search over the prompt text.
/// SQLite `LIKE` is case-insensitive for ASCII, which is the contract here.
pub async fn search(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let pattern = format!("%{}%", term);

    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE question LIKE ?1
        ORDER BY id
        "#,
    )
    .bind(pattern)
    .fetch_all(pool)
    .await
}

/// Fetches every question belonging to one category, ordered by id.
pub async fn by_category(pool: &SqlitePool, category_id: i64) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = ?1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(pool)
    .await
}

/// Fetches the questions whose id is not in `exclude`, optionally restricted
/// to one category.
pub async fn excluding(
    pool: &SqlitePool,
    exclude: &[i64],
    category_id: Option<i64>,
) -> sqlx::Result<Vec<Question>> {
    // SQLite accepts an empty IN list, so an empty exclusion set needs no
    // special case: `id NOT IN ()` keeps every row.
    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id NOT IN (",
    );

    let mut separated = builder.separated(",");
    for id in exclude {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    if let Some(category_id) = category_id {
        builder.push(" AND category = ");
        builder.push_bind(category_id);
    }

    builder.build_query_as::<Question>().fetch_all(pool).await
}

/// Inserts a new question and returns its assigned id.
pub async fn create(pool: &SqlitePool, req: &CreateQuestionRequest) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&req.question)
    .bind(&req.answer)
    .bind(req.category)
    .bind(req.difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Deletes a question by id. Returns the number of rows removed; zero means
/// the id did not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Counts all stored questions.
pub async fn count(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
}
