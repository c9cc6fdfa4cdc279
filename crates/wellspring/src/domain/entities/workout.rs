//! Workout Analysis - Pose quality score and joint-level feedback

use serde::{Deserialize, Serialize};

/// One corrective or affirming feedback entry for a joint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFeedbackItem {
    pub joint: String,
    pub feedback: String,
    pub correction: String,
}

/// Result of one pose assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseAnalysis {
    /// Form quality in [0, 100]
    pub overall_score: f64,
    /// Anatomical-priority order, as encoded in the exercise rule table
    pub feedback: Vec<PoseFeedbackItem>,
    /// Present only for rep-based exercise types
    pub repetition_count: Option<u32>,
}
