//! Pose/Form Feedback Selector
//!
//! Maps an exercise type and a drawn quality score to an ordered list of
//! joint-level feedback via a fixed rule table. Score bands gate the
//! corrective items; lower bands add more of them. The selector never
//! inspects pixel data - undecodable frames are rejected upstream. A
//! landmark-based estimator replaces this behind the `PoseEstimator` port.

use std::sync::Arc;

use wellspring::domain::{EngineError, PoseAnalysis, PoseFeedbackItem};
use wellspring::ports::{EntropySource, PoseEstimator};

use super::title_case;

/// Exercise types that get a repetition count, and the draw range
const REP_BASED: &[&str] = &["squat", "pushup"];
const REP_RANGE: (i64, i64) = (5, 20);

/// Score range for exercise types without a dedicated rule
const GENERIC_SCORE_RANGE: (i64, i64) = (75, 100);

struct FeedbackSpec {
    joint: &'static str,
    feedback: &'static str,
    correction: &'static str,
}

/// One corrective item, emitted when the drawn score falls below `below`
struct Band {
    below: i64,
    item: FeedbackSpec,
}

/// Rule for one exercise type: a score range, threshold-gated corrective
/// items in anatomical-priority order, an optional good-form item for when
/// no band triggers, and items emitted regardless of score
struct ExerciseRule {
    key: &'static str,
    score_range: (i64, i64),
    bands: &'static [Band],
    good_form: Option<FeedbackSpec>,
    always: &'static [FeedbackSpec],
}

const RULES: &[ExerciseRule] = &[
    ExerciseRule {
        key: "squat",
        score_range: (60, 95),
        bands: &[
            Band {
                below: 75,
                item: FeedbackSpec {
                    joint: "Knees",
                    feedback: "Knees are caving inwards. This can put stress on your joints.",
                    correction:
                        "Push knees out, align them over your toes throughout the movement.",
                },
            },
            Band {
                below: 80,
                item: FeedbackSpec {
                    joint: "Back",
                    feedback: "Your lower back is rounding slightly.",
                    correction: "Keep your chest up and core engaged to maintain a neutral spine.",
                },
            },
        ],
        good_form: Some(FeedbackSpec {
            joint: "Overall",
            feedback: "Excellent depth and control!",
            correction: "Maintain this form.",
        }),
        always: &[],
    },
    ExerciseRule {
        key: "plank",
        score_range: (70, 98),
        bands: &[Band {
            below: 80,
            item: FeedbackSpec {
                joint: "Hips",
                feedback: "Hips are sagging towards the floor.",
                correction: "Tighten glutes and pull navel towards spine to lift hips.",
            },
        }],
        good_form: None,
        always: &[FeedbackSpec {
            joint: "Neck",
            feedback: "Your neck position is not neutral.",
            correction: "Look down at the floor, keeping your neck in line with your spine.",
        }],
    },
    ExerciseRule {
        key: "yoga_tree_pose",
        score_range: (50, 90),
        bands: &[Band {
            below: 70,
            item: FeedbackSpec {
                joint: "Standing Leg",
                feedback: "Slight wobble detected in your standing leg.",
                correction: "Engage your glutes and core for better stability.",
            },
        }],
        good_form: None,
        always: &[FeedbackSpec {
            joint: "Hips",
            feedback: "Hips are not fully squared forward.",
            correction: "Gently rotate your hip forward to align.",
        }],
    },
];

/// Rule-table-driven form assessor; the frame bytes are accepted but never
/// inspected
pub struct RuleBasedPoseEstimator {
    entropy: Arc<dyn EntropySource>,
}

impl RuleBasedPoseEstimator {
    pub fn new(entropy: Arc<dyn EntropySource>) -> Self {
        Self { entropy }
    }
}

impl PoseEstimator for RuleBasedPoseEstimator {
    fn assess(&self, exercise_type: &str, _frame: &[u8]) -> Result<PoseAnalysis, EngineError> {
        let key = exercise_type.to_lowercase();
        let rule = RULES.iter().find(|r| r.key == key);

        let (lo, hi) = rule.map_or(GENERIC_SCORE_RANGE, |r| r.score_range);
        let score = self.entropy.pick(lo, hi);

        let mut feedback = Vec::new();
        match rule {
            Some(rule) => {
                let mut band_triggered = false;
                for band in rule.bands {
                    if score < band.below {
                        feedback.push(item(&band.item));
                        band_triggered = true;
                    }
                }
                if !band_triggered {
                    if let Some(good) = &rule.good_form {
                        feedback.push(item(good));
                    }
                }
                feedback.extend(rule.always.iter().map(item));
            }
            None => {
                feedback.push(PoseFeedbackItem {
                    joint: "General".to_string(),
                    feedback: format!("Good general form for {}.", title_case(&key)),
                    correction: "Keep up the great work!".to_string(),
                });
            }
        }

        let repetition_count = REP_BASED
            .contains(&key.as_str())
            .then(|| self.entropy.pick(REP_RANGE.0, REP_RANGE.1) as u32);

        Ok(PoseAnalysis {
            overall_score: score as f64,
            feedback,
            repetition_count,
        })
    }
}

fn item(spec: &FeedbackSpec) -> PoseFeedbackItem {
    PoseFeedbackItem {
        joint: spec.joint.to_string(),
        feedback: spec.feedback.to_string(),
        correction: spec.correction.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::entropy::{ScriptedEntropy, SeededEntropy};

    fn assess_with(ints: &[i64], exercise: &str) -> PoseAnalysis {
        RuleBasedPoseEstimator::new(Arc::new(ScriptedEntropy::new(ints, &[])))
            .assess(exercise, &[])
            .unwrap()
    }

    fn joints(analysis: &PoseAnalysis) -> Vec<&str> {
        analysis.feedback.iter().map(|f| f.joint.as_str()).collect()
    }

    #[test]
    fn test_squat_low_score_flags_knees_and_back() {
        let analysis = assess_with(&[70, 12], "squat");
        assert_eq!(analysis.overall_score, 70.0);
        assert_eq!(joints(&analysis), vec!["Knees", "Back"]);
        assert_eq!(analysis.repetition_count, Some(12));
    }

    #[test]
    fn test_squat_mid_score_flags_back_only() {
        let analysis = assess_with(&[77, 8], "squat");
        assert_eq!(joints(&analysis), vec!["Back"]);
    }

    #[test]
    fn test_squat_high_score_gets_good_form_item() {
        let analysis = assess_with(&[85, 8], "squat");
        assert_eq!(joints(&analysis), vec!["Overall"]);
        assert!(!joints(&analysis).contains(&"Knees"));
        assert_eq!(analysis.feedback[0].feedback, "Excellent depth and control!");
    }

    #[test]
    fn test_plank_always_flags_neck() {
        let sagging = assess_with(&[75], "plank");
        assert_eq!(joints(&sagging), vec!["Hips", "Neck"]);
        let solid = assess_with(&[90], "plank");
        assert_eq!(joints(&solid), vec!["Neck"]);
        assert_eq!(solid.repetition_count, None);
    }

    #[test]
    fn test_tree_pose_bands() {
        let wobbly = assess_with(&[60], "yoga_tree_pose");
        assert_eq!(joints(&wobbly), vec!["Standing Leg", "Hips"]);
        let steady = assess_with(&[80], "yoga_tree_pose");
        assert_eq!(joints(&steady), vec!["Hips"]);
    }

    #[test]
    fn test_unmatched_exercise_falls_through_to_generic() {
        let analysis = assess_with(&[80], "bench_press");
        assert_eq!(joints(&analysis), vec!["General"]);
        assert!(analysis.feedback[0].feedback.contains("Bench Press"));
        assert_eq!(analysis.repetition_count, None);
    }

    #[test]
    fn test_pushup_is_rep_based_but_generic() {
        let analysis = assess_with(&[80, 15], "pushup");
        assert_eq!(joints(&analysis), vec!["General"]);
        assert_eq!(analysis.repetition_count, Some(15));
    }

    #[test]
    fn test_exercise_match_is_case_insensitive() {
        let analysis = assess_with(&[70, 10], "SQUAT");
        assert!(joints(&analysis).contains(&"Knees"));
    }

    #[test]
    fn test_scores_and_reps_stay_in_range() {
        let estimator = RuleBasedPoseEstimator::new(Arc::new(SeededEntropy::new(17)));
        for exercise in ["squat", "plank", "yoga_tree_pose", "jumping_jacks"] {
            for _ in 0..50 {
                let analysis = estimator.assess(exercise, &[]).unwrap();
                assert!((0.0..100.0).contains(&analysis.overall_score));
                assert!(!analysis.feedback.is_empty());
                if let Some(reps) = analysis.repetition_count {
                    assert!((REP_RANGE.0..REP_RANGE.1).contains(&(reps as i64)));
                }
            }
        }
    }
}
