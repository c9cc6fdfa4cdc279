//! Journal Analysis DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wellspring::domain::{RiskEstimate, TextAnalysis};

/// Journal analysis request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalAnalysisRequest {
    pub journal_text: String,
}

/// Sentiment portion of a journal analysis
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysisBody {
    pub text: String,
    pub compound_score: f64,
    pub label: String,
    pub keywords: Vec<String>,
    pub topics: Vec<String>,
}

impl From<TextAnalysis> for SentimentAnalysisBody {
    fn from(analysis: TextAnalysis) -> Self {
        Self {
            text: analysis.text,
            compound_score: analysis.compound_score,
            label: analysis.label.to_string(),
            keywords: analysis.keywords,
            topics: analysis.topics,
        }
    }
}

/// Journal analysis response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalAnalysisResponse {
    pub sentiment_analysis: SentimentAnalysisBody,
    pub stress_level: f64,
    pub burnout_risk: f64,
    pub recovery_suggestions: Vec<String>,
}

impl JournalAnalysisResponse {
    pub fn new(
        analysis: TextAnalysis,
        risk: RiskEstimate,
        recovery_suggestions: Vec<String>,
    ) -> Self {
        Self {
            sentiment_analysis: analysis.into(),
            stress_level: risk.stress_level,
            burnout_risk: risk.burnout_risk,
            recovery_suggestions,
        }
    }
}
