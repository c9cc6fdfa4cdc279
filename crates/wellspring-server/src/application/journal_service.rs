//! Journal Pipeline (Use Case)
//!
//! Sentiment analysis followed by risk estimation over the same text.

use std::sync::Arc;

use wellspring::domain::{RiskEstimate, TextAnalysis};
use wellspring::ports::SentimentEstimator;

use crate::services::risk::RiskEstimator;

/// Fixed recovery suggestions returned with every journal analysis
const RECOVERY_SUGGESTIONS: [&str; 3] = [
    "Practice deep breathing for 5 minutes",
    "Take a short walk",
    "Connect with a friend",
];

/// Journal analysis pipeline over a pluggable sentiment estimator
pub struct JournalService<S: SentimentEstimator> {
    sentiment: Arc<S>,
    risk: RiskEstimator,
}

impl<S: SentimentEstimator> JournalService<S> {
    pub fn new(sentiment: Arc<S>) -> Self {
        Self {
            sentiment,
            risk: RiskEstimator::new(),
        }
    }

    /// Analyze one journal entry. Infallible: empty text yields the
    /// neutral analysis and its baseline risk indices.
    pub fn analyze(&self, text: &str) -> (TextAnalysis, RiskEstimate) {
        let analysis = self.sentiment.analyze(text);
        let risk = self.risk.estimate(text, analysis.compound_score);
        tracing::debug!(
            label = %analysis.label,
            stress = risk.stress_level,
            burnout = risk.burnout_risk,
            "journal analyzed"
        );
        (analysis, risk)
    }

    pub fn recovery_suggestions(&self) -> Vec<String> {
        RECOVERY_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sentiment::LexiconSentimentAnalyzer;
    use wellspring::domain::SentimentLabel;

    fn service() -> JournalService<LexiconSentimentAnalyzer> {
        JournalService::new(Arc::new(LexiconSentimentAnalyzer::new()))
    }

    #[test]
    fn test_empty_entry_is_neutral_with_baseline_risk() {
        let (analysis, risk) = service().analyze("");
        assert_eq!(analysis.label, SentimentLabel::Neutral);
        assert_eq!(analysis.compound_score, 0.0);
        assert!(analysis.keywords.is_empty());
        // negativity of 1.0 alone: 25 stress, 35 burnout
        assert_eq!(risk.stress_level, 25.0);
        assert_eq!(risk.burnout_risk, 35.0);
    }

    #[test]
    fn test_risk_is_fed_the_sentiment_score() {
        let (analysis, risk) = service().analyze("great happy wonderful day");
        assert!(analysis.compound_score > 0.0);
        // positive sentiment lowers both indices below the neutral baseline
        assert!(risk.stress_level < 25.0);
        assert!(risk.burnout_risk < 35.0);
    }

    #[test]
    fn test_recovery_suggestions_are_fixed() {
        let suggestions = service().recovery_suggestions();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0], "Practice deep breathing for 5 minutes");
    }
}
