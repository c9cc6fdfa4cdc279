//! Journal Routes
//!
//! HTTP handlers that delegate to the journal pipeline.

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{ApiError, ApiJson, ErrorBody, JournalAnalysisRequest, JournalAnalysisResponse};
use crate::AppState;

/// Analyze a journal entry
#[utoipa::path(
    post,
    path = "/api/v1/ai/journal-nlp",
    request_body = JournalAnalysisRequest,
    responses(
        (status = 200, description = "Sentiment and risk analysis", body = JournalAnalysisResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Journal"
)]
pub async fn analyze_journal(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<JournalAnalysisRequest>,
) -> Result<Json<JournalAnalysisResponse>, ApiError> {
    let (analysis, risk) = state.journal.analyze(&payload.journal_text);
    Ok(Json(JournalAnalysisResponse::new(
        analysis,
        risk,
        state.journal.recovery_suggestions(),
    )))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/ai/journal-nlp", post(analyze_journal))
}
