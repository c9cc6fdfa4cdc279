//! Coaching Chat DTOs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wellspring::domain::CoachReply;

/// Coaching chat request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachChatRequest {
    pub user_id: String,
    pub message: String,
    /// Optional user-context snapshot (recent mood, last workout, goals)
    #[schema(value_type = Object)]
    pub context: Option<HashMap<String, serde_json::Value>>,
}

/// Coaching chat response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoachChatResponse {
    pub response: String,
    pub suggestions: Vec<String>,
}

impl From<CoachReply> for CoachChatResponse {
    fn from(reply: CoachReply) -> Self {
        Self {
            response: reply.response,
            suggestions: reply.suggestions,
        }
    }
}
