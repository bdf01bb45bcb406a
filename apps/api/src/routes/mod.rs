pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route(
            "/api/v1/match/score-optimized",
            post(handlers::handle_score_optimized),
        )
        .fallback(not_found)
        .with_state(state)
}
