//! Meal Pipeline (Use Case)
//!
//! Recognize candidate foods from a photo reference, then look up and
//! scale their nutrients. The URL is validated, never fetched - fetching
//! belongs to the recognizer implementation that actually needs pixels.

use std::sync::Arc;

use wellspring::domain::{EngineError, MealAnalysis};
use wellspring::ports::FoodRecognizer;

use crate::services::nutrition::NutritionEngine;

/// Reported estimation confidence, a fixed constant of the rule-based
/// recognizer
pub const ACCURACY_SCORE: f64 = 0.85;

/// Meal analysis pipeline over a pluggable food recognizer
pub struct MealService<R: FoodRecognizer> {
    recognizer: Arc<R>,
    engine: NutritionEngine,
}

impl<R: FoodRecognizer> MealService<R> {
    pub fn new(recognizer: Arc<R>, engine: NutritionEngine) -> Self {
        Self { recognizer, engine }
    }

    pub fn analyze(&self, image_url: &str, user_id: &str) -> Result<MealAnalysis, EngineError> {
        validate_image_url(image_url)?;
        let candidates = self.recognizer.recognize(image_url, user_id)?;
        self.engine.analyze(&candidates)
    }
}

fn validate_image_url(url: &str) -> Result<(), EngineError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(EngineError::validation("imageUrl must not be empty"));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(EngineError::decode(format!(
            "image URL '{trimmed}' is not an http(s) URL"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::entropy::ScriptedEntropy;
    use crate::services::nutrition::NutrientTable;

    struct FixedRecognizer(Vec<String>);

    impl FoodRecognizer for FixedRecognizer {
        fn recognize(&self, _image_url: &str, _user_id: &str) -> Result<Vec<String>, EngineError> {
            Ok(self.0.clone())
        }
    }

    fn service(candidates: &[&str], floats: &[f64]) -> MealService<FixedRecognizer> {
        let table = Arc::new(NutrientTable::builtin());
        MealService::new(
            Arc::new(FixedRecognizer(
                candidates.iter().map(|s| s.to_string()).collect(),
            )),
            NutritionEngine::new(table, Arc::new(ScriptedEntropy::new(&[], floats))),
        )
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = service(&["rice"], &[1.0]).analyze("ftp://example.com/meal.jpg", "user-1");
        assert!(matches!(result, Err(EngineError::Decode(_))));
    }

    #[test]
    fn test_rejects_blank_url() {
        let result = service(&["rice"], &[1.0]).analyze("   ", "user-1");
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_zero_candidates_surface_as_empty_result() {
        let result = service(&[], &[]).analyze("https://example.com/meal.jpg", "user-1");
        assert!(matches!(result, Err(EngineError::EmptyResult(_))));
    }

    #[test]
    fn test_happy_path_scales_and_totals() {
        let analysis = service(&["rice", "dal"], &[1.0, 1.0])
            .analyze("https://example.com/meal.jpg", "user-1")
            .unwrap();
        assert_eq!(analysis.detections.len(), 2);
        assert_eq!(analysis.total_calories, 240.0);
    }
}
