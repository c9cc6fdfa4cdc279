//! Food Recognizer Port
//!
//! Candidate food names from a meal photo reference. The rule-based
//! implementation draws names from the nutrient table; a real recognizer
//! would detect and classify items in the fetched image. Portion sizing is
//! the acknowledged hard sub-problem - it stays behind this seam plus the
//! entropy port so a future estimator is a drop-in replacement.

use crate::domain::EngineError;

pub trait FoodRecognizer: Send + Sync {
    /// Candidate food names detected in the referenced photo
    fn recognize(&self, image_url: &str, user_id: &str) -> Result<Vec<String>, EngineError>;
}
