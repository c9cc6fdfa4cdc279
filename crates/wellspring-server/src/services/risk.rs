//! Stress/Burnout Risk Estimator
//!
//! Linear keyword-and-sentiment heuristics producing two bounded [0, 100]
//! indices. The coefficients are preserved verbatim for output
//! compatibility with earlier deployments.

use wellspring::domain::RiskEstimate;

/// Terms whose presence raises the stress index. Each counts at most once,
/// case-insensitive substring match.
const STRESS_KEYWORDS: &[&str] = &[
    "stress",
    "anxiety",
    "overwhelmed",
    "tired",
    "pressure",
    "burnout",
    "exhausted",
    "deadline",
    "struggle",
];

/// Terms whose presence raises the burnout index
const BURNOUT_KEYWORDS: &[&str] = &[
    "drained",
    "no motivation",
    "cynical",
    "helpless",
    "frustrated",
    "depressed",
    "fatigue",
    "overwork",
];

/// Rule-based risk estimator over the fixed keyword sets
#[derive(Debug, Default, Clone, Copy)]
pub struct RiskEstimator;

impl RiskEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimate both indices from the text and its compound sentiment.
    /// More keyword hits and more negative sentiment raise both; each is
    /// clamped to [0, 100] after the linear combination and rounded to two
    /// decimal places.
    pub fn estimate(&self, text: &str, sentiment_score: f64) -> RiskEstimate {
        let lowered = text.to_lowercase();
        let stress_count = count_hits(&lowered, STRESS_KEYWORDS);
        let burnout_count = count_hits(&lowered, BURNOUT_KEYWORDS);
        let negativity = 1.0 - sentiment_score;

        let stress_level = stress_count as f64 * 8.0 + negativity * 15.0 + negativity * 10.0;
        let burnout_risk = burnout_count as f64 * 12.0 + negativity * 20.0 + negativity * 15.0;

        RiskEstimate {
            stress_level: round2(stress_level.clamp(0.0, 100.0)),
            burnout_risk: round2(burnout_risk.clamp(0.0, 100.0)),
        }
    }
}

/// Number of keywords present in the text; repetition does not add hits
fn count_hits(lowered: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lowered.contains(**k)).count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
