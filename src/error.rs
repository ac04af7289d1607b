// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
///
/// Each variant carries a diagnostic detail that goes to the log; the
/// response body carries the canonical message for the status, and its
/// `error` field always equals the actual HTTP status code.
#[derive(Debug)]
pub enum AppError {
    // 500 Internal Server Error
    InternalServerError(String),

    // 400 Bad Request (malformed or semantically invalid filter input)
    BadRequest(String),

    // 404 Not Found (missing entity or empty page)
    NotFound(String),

    // 405 Method Not Allowed (route exists, verb does not)
    MethodNotAllowed(String),

    // 422 Unprocessable (well-formed request the store could not complete)
    Unprocessable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into the JSON error envelope
/// `{success: false, error: <status>, message: <string>}`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InternalServerError(detail) => {
                tracing::error!("Internal Server Error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
            AppError::BadRequest(detail) => {
                tracing::debug!("Bad Request: {}", detail);
                (StatusCode::BAD_REQUEST, "bad request")
            }
            AppError::NotFound(detail) => {
                tracing::debug!("Not Found: {}", detail);
                (StatusCode::NOT_FOUND, "resource not found")
            }
            AppError::MethodNotAllowed(detail) => {
                tracing::debug!("Method Not Allowed: {}", detail);
                (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
            }
            AppError::Unprocessable(detail) => {
                tracing::warn!("Unprocessable: {}", detail);
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable")
            }
        };
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on database queries; handlers override the
/// mapping with `map_err` where a route contract demands 400 or 422.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}
