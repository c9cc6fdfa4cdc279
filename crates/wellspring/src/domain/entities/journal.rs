//! Journal Analysis - Sentiment and risk indices for one text entry
//!
//! Pure domain entities without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SentimentLabel;

/// Full lexical analysis of one journal text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// The analyzed input, unchanged
    pub text: String,
    /// Compound polarity score in [-1, 1]
    pub compound_score: f64,
    pub label: SentimentLabel,
    /// Top-5 content words by frequency, first-occurrence tie-break
    pub keywords: Vec<String>,
    pub topics: Vec<String>,
}

impl TextAnalysis {
    /// The neutral analysis produced for empty or whitespace-only input
    pub fn neutral(text: String, topics: Vec<String>) -> Self {
        Self {
            text,
            compound_score: 0.0,
            label: SentimentLabel::Neutral,
            keywords: Vec::new(),
            topics,
        }
    }
}

/// Bounded stress and burnout risk indices
///
/// Both values are heuristic [0, 100] scores, not clinical measures. They
/// are non-decreasing in keyword hits and in (1 - sentiment score).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    pub stress_level: f64,
    pub burnout_risk: f64,
}
