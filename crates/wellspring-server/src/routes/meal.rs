//! Meal Routes
//!
//! HTTP handlers that delegate to the meal pipeline. An empty detection
//! batch surfaces as 404; a bad or unreachable image reference as 400.

use axum::{extract::State, routing::post, Json, Router};

use crate::application::ACCURACY_SCORE;
use crate::models::{ApiError, ApiJson, ErrorBody, MealAnalysisRequest, MealAnalysisResponse};
use crate::AppState;

/// Analyze a meal photo
#[utoipa::path(
    post,
    path = "/api/v1/ai/meal-ocr",
    request_body = MealAnalysisRequest,
    responses(
        (status = 200, description = "Estimated foods and calorie total", body = MealAnalysisResponse),
        (status = 400, description = "Malformed request or image reference", body = ErrorBody),
        (status = 404, description = "No food items detected", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Meal"
)]
pub async fn analyze_meal(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<MealAnalysisRequest>,
) -> Result<Json<MealAnalysisResponse>, ApiError> {
    let analysis = state
        .meal
        .analyze(&payload.image_url, &payload.user_id)
        .map_err(ApiError::from)?;
    Ok(Json(MealAnalysisResponse::new(analysis, ACCURACY_SCORE)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/ai/meal-ocr", post(analyze_meal))
}
