//! Workout Pipeline (Use Case)
//!
//! Decode the frame payload, then hand it to the pose estimator. All
//! decode failures surface here, before any estimator runs.

use std::sync::Arc;

use base64::prelude::*;

use wellspring::domain::{EngineError, PoseAnalysis};
use wellspring::ports::PoseEstimator;

/// Pose analysis pipeline over a pluggable pose estimator
pub struct WorkoutService<P: PoseEstimator> {
    estimator: Arc<P>,
}

impl<P: PoseEstimator> WorkoutService<P> {
    pub fn new(estimator: Arc<P>) -> Self {
        Self { estimator }
    }

    pub fn analyze(
        &self,
        image_data: &str,
        user_id: &str,
        exercise_type: &str,
    ) -> Result<PoseAnalysis, EngineError> {
        let frame = decode_frame(image_data)?;
        tracing::debug!(
            %user_id,
            %exercise_type,
            bytes = frame.len(),
            "assessing pose frame"
        );
        self.estimator.assess(exercise_type, &frame)
    }
}

/// Decode a base64 frame payload, stripping an optional data-URI prefix.
/// Only the container format is sniffed; pixel data is never inspected.
pub(crate) fn decode_frame(image_data: &str) -> Result<Vec<u8>, EngineError> {
    let trimmed = image_data.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation("imageData must not be empty"));
    }
    let encoded = trimmed
        .split_once(',')
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    let bytes = BASE64_STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| EngineError::decode(format!("invalid base64 image data: {e}")))?;
    if bytes.is_empty() {
        return Err(EngineError::decode("empty image payload"));
    }
    image::guess_format(&bytes)
        .map_err(|_| EngineError::decode("payload is not a recognizable image"))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::entropy::ScriptedEntropy;
    use crate::services::pose::RuleBasedPoseEstimator;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn png_payload() -> String {
        BASE64_STANDARD.encode(PNG_MAGIC)
    }

    fn service(ints: &[i64]) -> WorkoutService<RuleBasedPoseEstimator> {
        WorkoutService::new(Arc::new(RuleBasedPoseEstimator::new(Arc::new(
            ScriptedEntropy::new(ints, &[]),
        ))))
    }

    #[test]
    fn test_decodes_bare_base64() {
        let bytes = decode_frame(&png_payload()).unwrap();
        assert_eq!(bytes, PNG_MAGIC);
    }

    #[test]
    fn test_strips_data_uri_prefix() {
        let payload = format!("data:image/png;base64,{}", png_payload());
        let bytes = decode_frame(&payload).unwrap();
        assert_eq!(bytes, PNG_MAGIC);
    }

    #[test]
    fn test_invalid_base64_is_a_decode_error() {
        let result = decode_frame("!!! definitely not base64 !!!");
        assert!(matches!(result, Err(EngineError::Decode(_))));
    }

    #[test]
    fn test_non_image_payload_is_a_decode_error() {
        let payload = BASE64_STANDARD.encode(b"just some text");
        let result = decode_frame(&payload);
        assert!(matches!(result, Err(EngineError::Decode(_))));
    }

    #[test]
    fn test_blank_payload_is_a_validation_error() {
        let result = decode_frame("  ");
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_pipeline_reaches_the_estimator() {
        let analysis = service(&[70, 10])
            .analyze(&png_payload(), "user-1", "squat")
            .unwrap();
        assert_eq!(analysis.overall_score, 70.0);
        assert!(analysis.feedback.iter().any(|f| f.joint == "Knees"));
    }
}
