//! Pose Estimator Port

use crate::domain::{EngineError, PoseAnalysis};

/// Scores one decoded video frame for exercise form quality.
///
/// `frame` is the decoded image payload. The rule-based implementation
/// never inspects it; a landmark-based variant would.
pub trait PoseEstimator: Send + Sync {
    fn assess(&self, exercise_type: &str, frame: &[u8]) -> Result<PoseAnalysis, EngineError>;
}
