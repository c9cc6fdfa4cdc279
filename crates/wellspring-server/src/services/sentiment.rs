//! Lexical Sentiment Scorer
//!
//! Rule-based implementation of the `SentimentEstimator` port: an embedded
//! valence lexicon with additive scoring and square-root normalization into
//! [-1, 1], plus frequency-ranked keyword extraction and substring-matched
//! topic tagging. Swappable with a trained sentiment model behind the same
//! port.

use std::collections::{HashMap, HashSet};

use wellspring::domain::{SentimentLabel, TextAnalysis};
use wellspring::ports::SentimentEstimator;

/// Normalization constant for the compound score: total / sqrt(total^2 + alpha)
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence damping applied to a term preceded by a negation
const NEGATION_SCALAR: f64 = -0.74;

/// Word valences, roughly on a [-3.5, 3.5] scale
const LEXICON: &[(&str, f64)] = &[
    // positive
    ("accomplished", 2.4),
    ("achieve", 1.9),
    ("achieved", 2.0),
    ("amazing", 2.8),
    ("best", 3.2),
    ("better", 1.9),
    ("calm", 1.3),
    ("confident", 2.2),
    ("energized", 2.0),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("fun", 2.3),
    ("good", 1.9),
    ("grateful", 2.3),
    ("great", 3.1),
    ("happy", 2.7),
    ("healthy", 1.9),
    ("hope", 1.9),
    ("hopeful", 2.0),
    ("improve", 1.7),
    ("improved", 1.9),
    ("joy", 2.9),
    ("love", 3.2),
    ("motivated", 2.1),
    ("nice", 1.8),
    ("optimistic", 2.0),
    ("peaceful", 2.2),
    ("proud", 2.2),
    ("progress", 1.7),
    ("refreshed", 1.9),
    ("relaxed", 1.8),
    ("rested", 1.6),
    ("strong", 1.8),
    ("succeed", 2.2),
    ("success", 2.7),
    ("win", 2.8),
    ("wonderful", 2.7),
    // negative
    ("afraid", -2.0),
    ("angry", -2.7),
    ("anxiety", -2.1),
    ("anxious", -1.9),
    ("awful", -2.7),
    ("bad", -2.5),
    ("burnout", -2.4),
    ("cry", -2.0),
    ("cynical", -1.8),
    ("deadline", -1.0),
    ("depressed", -2.7),
    ("drained", -1.9),
    ("exhausted", -2.3),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failure", -2.6),
    ("fear", -2.2),
    ("frustrated", -2.2),
    ("guilty", -2.0),
    ("hate", -2.7),
    ("helpless", -2.3),
    ("hopeless", -2.6),
    ("hurt", -2.2),
    ("lonely", -2.2),
    ("miserable", -2.8),
    ("overwhelmed", -1.9),
    ("overworked", -1.9),
    ("pain", -2.3),
    ("pressure", -1.4),
    ("sad", -2.1),
    ("sick", -2.0),
    ("stress", -1.9),
    ("stressed", -2.0),
    ("struggle", -1.9),
    ("struggling", -2.0),
    ("terrible", -2.9),
    ("tired", -1.4),
    ("weak", -1.6),
    ("worried", -1.8),
    ("worry", -1.6),
    ("worst", -3.1),
];

/// Tokens that flip the valence of the following term
const NEGATIONS: &[&str] = &[
    "ain't",
    "can't",
    "cannot",
    "couldn't",
    "didn't",
    "doesn't",
    "don't",
    "hardly",
    "isn't",
    "never",
    "no",
    "not",
    "shouldn't",
    "wasn't",
    "without",
    "won't",
    "wouldn't",
];

/// Fixed stopword set for keyword extraction, including the fragments that
/// alphabetic tokenization leaves behind from common contractions
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing", "don",
    "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has", "hasn",
    "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m", "ma",
    "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not", "now",
    "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out",
    "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some", "such",
    "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up", "ve", "very", "was",
    "wasn", "we", "were", "weren", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "won", "wouldn", "y", "you", "your", "yours", "yourself", "yourselves",
];

/// Lexicon-based sentiment analyzer over fixed reference tables
///
/// Built once at startup; read-only afterwards.
pub struct LexiconSentimentAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    stopwords: HashSet<&'static str>,
}

impl LexiconSentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }

    /// Compound polarity in [-1, 1]: sum the valences of known terms,
    /// flip negated ones, normalize by sqrt(total^2 + alpha)
    fn compound(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut negated = false;
        for raw in text.split_whitespace() {
            let cleaned: String = raw
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphabetic() || *c == '\'')
                .collect();
            let word = cleaned.trim_matches('\'');
            if word.is_empty() {
                continue;
            }
            if let Some(&valence) = self.lexicon.get(word) {
                total += if negated {
                    valence * NEGATION_SCALAR
                } else {
                    valence
                };
            }
            negated = NEGATIONS.contains(&word);
        }
        if total == 0.0 {
            return 0.0;
        }
        let compound = total / (total * total + NORMALIZATION_ALPHA).sqrt();
        compound.clamp(-1.0, 1.0)
    }

    /// Top-5 content words by frequency, descending, ties broken by first
    /// occurrence. Non-alphabetic tokens and stopwords are dropped.
    fn keywords(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, token) in lowered
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|t| !t.is_empty())
            .enumerate()
        {
            if self.stopwords.contains(token) {
                continue;
            }
            let entry = counts.entry(token).or_insert((0, position));
            entry.0 += 1;
        }
        let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        ranked
            .into_iter()
            .take(5)
            .map(|(token, _)| token.to_string())
            .collect()
    }

    /// Base topics plus substring-triggered extensions. Substring match on
    /// the lowercased text, not tokenized match.
    fn topics(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut topics = vec!["wellness".to_string(), "daily reflection".to_string()];
        if lowered.contains("stress") || lowered.contains("anxiety") {
            topics.push("mental health".to_string());
        }
        if lowered.contains("goals") || lowered.contains("achieve") {
            topics.push("personal growth".to_string());
        }
        topics
    }
}

impl Default for LexiconSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentEstimator for LexiconSentimentAnalyzer {
    fn analyze(&self, text: &str) -> TextAnalysis {
        let topics = self.topics(text);
        if text.trim().is_empty() {
            return TextAnalysis::neutral(text.to_string(), topics);
        }
        let compound = self.compound(text);
        TextAnalysis {
            text: text.to_string(),
            compound_score: compound,
            label: SentimentLabel::from_score(compound),
            keywords: self.keywords(text),
            topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> LexiconSentimentAnalyzer {
        LexiconSentimentAnalyzer::new()
    }

    #[test]
    fn test_empty_text_is_neutral() {
        for text in ["", "   ", "\n\t"] {
            let analysis = analyzer().analyze(text);
            assert_eq!(analysis.compound_score, 0.0);
            assert_eq!(analysis.label, SentimentLabel::Neutral);
            assert!(analysis.keywords.is_empty());
            assert_eq!(analysis.topics, vec!["wellness", "daily reflection"]);
        }
    }

    #[test]
    fn test_positive_text() {
        let analysis = analyzer().analyze("Had a great workout, feeling happy and strong");
        assert!(analysis.compound_score > 0.05);
        assert_eq!(analysis.label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_text() {
        let analysis = analyzer().analyze("Exhausted and stressed, everything feels terrible");
        assert!(analysis.compound_score < -0.05);
        assert_eq!(analysis.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_compound_score_stays_bounded() {
        let gushing = "great ".repeat(100);
        let bleak = "terrible ".repeat(100);
        assert!(analyzer().analyze(&gushing).compound_score <= 1.0);
        assert!(analyzer().analyze(&bleak).compound_score >= -1.0);
    }

    #[test]
    fn test_negation_flips_valence() {
        let plain = analyzer().analyze("I am happy").compound_score;
        let negated = analyzer().analyze("I am not happy").compound_score;
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_keywords_ranked_by_frequency() {
        let analysis = analyzer().analyze("yoga yoga yoga sleep sleep morning run walk swim");
        assert_eq!(analysis.keywords.len(), 5);
        assert_eq!(analysis.keywords[0], "yoga");
        assert_eq!(analysis.keywords[1], "sleep");
    }

    #[test]
    fn test_keyword_ties_break_by_first_occurrence() {
        let analysis = analyzer().analyze("cycling swimming running");
        assert_eq!(analysis.keywords, vec!["cycling", "swimming", "running"]);
    }

    #[test]
    fn test_keywords_drop_stopwords_and_non_alphabetic() {
        let analysis = analyzer().analyze("the gym at 6am was empty, just the gym and me");
        assert!(analysis.keywords.contains(&"gym".to_string()));
        assert!(!analysis.keywords.contains(&"the".to_string()));
        assert!(!analysis.keywords.iter().any(|k| k.contains('6')));
    }

    #[test]
    fn test_topic_extensions_are_substring_matched() {
        let a = analyzer().analyze("so much stress at work");
        assert!(a.topics.contains(&"mental health".to_string()));
        let b = analyzer().analyze("I want to achieve more");
        assert!(b.topics.contains(&"personal growth".to_string()));
        // "stressful" and "goalscorer" still trigger: substring, not token
        let c = analyzer().analyze("a stressful week chasing goalscorer stats");
        assert!(c.topics.contains(&"mental health".to_string()));
        assert!(c.topics.contains(&"personal growth".to_string()));
        let d = analyzer().analyze("quiet day");
        assert_eq!(d.topics, vec!["wellness", "daily reflection"]);
    }
}
