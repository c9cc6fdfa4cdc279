//! Coach Routes
//!
//! HTTP handlers that delegate to the coaching pipeline.

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{ApiError, ApiJson, CoachChatRequest, CoachChatResponse, ErrorBody};
use crate::AppState;

/// One coaching chat turn
#[utoipa::path(
    post,
    path = "/api/v1/ai/coach-chat",
    request_body = CoachChatRequest,
    responses(
        (status = 200, description = "Coach reply and suggestions", body = CoachChatResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Coach"
)]
pub async fn coach_chat(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CoachChatRequest>,
) -> Result<Json<CoachChatResponse>, ApiError> {
    let reply = state
        .coach
        .chat(&payload.user_id, &payload.message, payload.context)
        .await
        .map_err(ApiError::from)?;
    Ok(Json(reply.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/ai/coach-chat", post(coach_chat))
}
