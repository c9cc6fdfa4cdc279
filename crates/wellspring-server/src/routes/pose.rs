//! Pose Routes
//!
//! HTTP handlers that delegate to the workout pipeline. All failures from
//! this pipeline, including an empty feedback result, are request errors.

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{ApiError, ApiJson, ErrorBody, PoseAnalysisRequest, PoseAnalysisResponse};
use crate::AppState;

/// Analyze one workout frame
#[utoipa::path(
    post,
    path = "/api/v1/ai/pose-detection",
    request_body = PoseAnalysisRequest,
    responses(
        (status = 200, description = "Form score and joint feedback", body = PoseAnalysisResponse),
        (status = 400, description = "Malformed request or undecodable frame", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Pose"
)]
pub async fn analyze_pose(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PoseAnalysisRequest>,
) -> Result<Json<PoseAnalysisResponse>, ApiError> {
    let analysis = state
        .workout
        .analyze(
            &payload.image_data,
            &payload.user_id,
            &payload.exercise_type,
        )
        .map_err(ApiError::empty_as_bad_request)?;
    Ok(Json(analysis.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/ai/pose-detection", post(analyze_pose))
}
