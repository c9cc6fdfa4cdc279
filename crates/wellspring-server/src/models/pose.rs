//! Pose Analysis DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wellspring::domain::{PoseAnalysis, PoseFeedbackItem};

/// Pose analysis request; `imageData` may carry a data-URI prefix
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoseAnalysisRequest {
    pub image_data: String,
    pub user_id: String,
    pub exercise_type: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoseFeedbackItemBody {
    pub joint: String,
    pub feedback: String,
    pub correction: String,
}

impl From<PoseFeedbackItem> for PoseFeedbackItemBody {
    fn from(item: PoseFeedbackItem) -> Self {
        Self {
            joint: item.joint,
            feedback: item.feedback,
            correction: item.correction,
        }
    }
}

/// Pose analysis response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PoseAnalysisResponse {
    pub overall_score: f64,
    pub feedback: Vec<PoseFeedbackItemBody>,
    pub repetition_count: Option<u32>,
}

impl From<PoseAnalysis> for PoseAnalysisResponse {
    fn from(analysis: PoseAnalysis) -> Self {
        Self {
            overall_score: analysis.overall_score,
            feedback: analysis.feedback.into_iter().map(Into::into).collect(),
            repetition_count: analysis.repetition_count,
        }
    }
}
