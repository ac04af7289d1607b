// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{category, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires every route to its handler.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ]);

    Router::new()
        .route("/categories", get(category::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(category::questions_by_category),
        )
        .route(
            "/questions",
            get(question::list_questions).post(question::create_or_search),
        )
        .route("/questions/{id}", delete(question::delete_question))
        .route("/search", post(question::search))
        .route("/quizzes", post(quiz::play_quiz))
        // Unknown paths and unsupported verbs still answer with the envelope.
        .fallback(unknown_route)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn unknown_route() -> AppError {
    AppError::NotFound("no such route".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("unsupported method for this route".to_string())
}
