//! Axum route handlers for the Match API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::models::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// POST /api/v1/match/score
///
/// First-pass score of a resume against a job description. Always 200 once the
/// body parses; degraded outcomes are carried inside the `MatchResult`.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let result = state
        .scorer
        .score_resume(&request.resume_text, &request.job_description)
        .instrument(info_span!("score_request", request_id = %Uuid::new_v4()))
        .await;

    Ok(Json(result))
}

/// POST /api/v1/match/score-optimized
///
/// Validation score for a resume already produced by the optimizer (85–100).
pub async fn handle_score_optimized(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let result = state
        .scorer
        .score_optimized_resume(&request.resume_text, &request.job_description)
        .instrument(info_span!("score_optimized_request", request_id = %Uuid::new_v4()))
        .await;

    Ok(Json(result))
}
