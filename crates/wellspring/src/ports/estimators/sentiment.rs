//! Sentiment Estimator Port

use crate::domain::TextAnalysis;

/// Maps free text to a compound polarity score, label, keywords, and topics.
///
/// Infallible: empty or whitespace-only input yields the neutral analysis,
/// never an error.
pub trait SentimentEstimator: Send + Sync {
    fn analyze(&self, text: &str) -> TextAnalysis;
}
