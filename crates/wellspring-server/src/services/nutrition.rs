//! Nutrition Lookup & Scaling Engine
//!
//! Maps candidate food names to the static nutrient table, applies a
//! per-detection serving-size factor drawn from the entropy port, and
//! aggregates calorie totals. The recognizer half simulates detection by
//! drawing names from the table; a real image-recognition model replaces
//! it behind the `FoodRecognizer` port without touching the scaling rules.

use std::collections::HashMap;
use std::sync::Arc;

use wellspring::domain::{
    EngineError, FoodDetection, Macronutrients, MealAnalysis, Micronutrients, NutrientRecord,
};
use wellspring::ports::{EntropySource, FoodRecognizer};

use super::title_case;

/// Serving-size factor range, the portion-estimation uncertainty band
const SERVING_FACTOR_LO: f64 = 0.8;
const SERVING_FACTOR_HI: f64 = 1.2;

/// Simulated detections per photo: 1 to 3 items
const DETECTIONS_LO: i64 = 1;
const DETECTIONS_HI: i64 = 4;

/// Static nutrient reference table, keyed by canonical lowercase name
///
/// Built once at startup, read-only afterwards. Entries keep their
/// definition order so simulated detection is reproducible under a seeded
/// entropy source.
pub struct NutrientTable {
    records: Vec<NutrientRecord>,
    index: HashMap<String, usize>,
}

impl NutrientTable {
    /// The built-in reference table
    pub fn builtin() -> Self {
        let rows: &[(&str, f64, f64, f64, f64, f64, u32)] = &[
            // name, calories, protein, carbohydrate, fat, fiber, serving g
            ("rice", 130.0, 2.7, 28.2, 0.3, 0.4, 100),
            ("dal", 110.0, 9.0, 20.0, 0.5, 8.0, 100),
            ("roti", 100.0, 3.0, 20.0, 1.5, 2.0, 50),
            ("chicken curry", 250.0, 25.0, 10.0, 12.0, 2.0, 150),
            ("vegetable stir-fry", 80.0, 3.0, 15.0, 1.0, 4.0, 150),
            ("samosa", 260.0, 5.0, 30.0, 15.0, 3.0, 100),
            ("biryani", 350.0, 15.0, 50.0, 10.0, 3.0, 200),
            ("paneer butter masala", 300.0, 15.0, 15.0, 20.0, 2.0, 150),
            ("naan", 280.0, 8.0, 50.0, 5.0, 3.0, 100),
            ("idli", 60.0, 2.0, 12.0, 0.5, 1.0, 50),
            ("dosa", 120.0, 4.0, 20.0, 3.0, 2.0, 70),
        ];
        let records: Vec<NutrientRecord> = rows
            .iter()
            .map(
                |&(name, calories, protein, carbohydrate, fat, fiber, serving)| NutrientRecord {
                    name: name.to_string(),
                    calories,
                    protein_g: protein,
                    carbohydrate_g: carbohydrate,
                    fat_g: fat,
                    fiber_g: fiber,
                    sugar_g: 0.0,
                    sodium_mg: 0.0,
                    reference_serving_g: serving,
                },
            )
            .collect();
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();
        Self { records, index }
    }

    /// Case-insensitive lookup by canonical name
    pub fn get(&self, name: &str) -> Option<&NutrientRecord> {
        self.index
            .get(&name.to_lowercase())
            .map(|&i| &self.records[i])
    }

    pub fn name_at(&self, index: usize) -> &str {
        &self.records[index].name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Simulated detector: draws 1-3 distinct table names per photo
pub struct RuleBasedFoodRecognizer {
    table: Arc<NutrientTable>,
    entropy: Arc<dyn EntropySource>,
}

impl RuleBasedFoodRecognizer {
    pub fn new(table: Arc<NutrientTable>, entropy: Arc<dyn EntropySource>) -> Self {
        Self { table, entropy }
    }
}

impl FoodRecognizer for RuleBasedFoodRecognizer {
    fn recognize(&self, image_url: &str, user_id: &str) -> Result<Vec<String>, EngineError> {
        tracing::debug!(%user_id, %image_url, "simulating food detection");
        let count = self.entropy.pick(DETECTIONS_LO, DETECTIONS_HI) as usize;
        let names = self
            .entropy
            .sample(self.table.len(), count)
            .into_iter()
            .map(|i| self.table.name_at(i).to_string())
            .collect();
        Ok(names)
    }
}

/// Deterministic lookup-and-scale rules over the nutrient table
pub struct NutritionEngine {
    table: Arc<NutrientTable>,
    entropy: Arc<dyn EntropySource>,
}

impl NutritionEngine {
    pub fn new(table: Arc<NutrientTable>, entropy: Arc<dyn EntropySource>) -> Self {
        Self { table, entropy }
    }

    /// Scale and aggregate one batch of candidate names.
    ///
    /// Zero candidates is a pipeline failure; a single unrecognized
    /// candidate is not - it degrades to a zeroed "Unknown Food" detection
    /// and the batch continues.
    pub fn analyze(&self, candidates: &[String]) -> Result<MealAnalysis, EngineError> {
        if candidates.is_empty() {
            return Err(EngineError::empty_result(
                "no food items detected in the image",
            ));
        }
        let detections: Vec<FoodDetection> = candidates
            .iter()
            .map(|candidate| match self.table.get(candidate) {
                Some(record) => {
                    let factor = self.entropy.uniform(SERVING_FACTOR_LO, SERVING_FACTOR_HI);
                    scale(record, factor)
                }
                None => {
                    tracing::debug!(%candidate, "candidate not in nutrient table");
                    FoodDetection::unknown(&title_case(candidate))
                }
            })
            .collect();
        let total_calories = detections.iter().map(|d| d.calories).sum();
        Ok(MealAnalysis {
            detections,
            total_calories,
        })
    }
}

/// Multiply every nutrient field by the serving factor; each output field
/// is rounded to one decimal place, grams to the nearest integer
fn scale(record: &NutrientRecord, factor: f64) -> FoodDetection {
    FoodDetection {
        matched_name: title_case(&record.name),
        serving_factor: factor,
        estimated_grams: (record.reference_serving_g as f64 * factor).round() as u32,
        calories: round1(record.calories * factor),
        macros: Macronutrients {
            protein: round1(record.protein_g * factor),
            carbohydrate: round1(record.carbohydrate_g * factor),
            fat: round1(record.fat_g * factor),
        },
        micros: Micronutrients {
            fiber: round1(record.fiber_g * factor),
            sugar: round1(record.sugar_g * factor),
            sodium: round1(record.sodium_mg * factor),
        },
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::entropy::ScriptedEntropy;

    fn engine_with(floats: &[f64]) -> NutritionEngine {
        NutritionEngine::new(
            Arc::new(NutrientTable::builtin()),
            Arc::new(ScriptedEntropy::new(&[], floats)),
        )
    }

    #[test]
    fn test_rice_at_reference_serving() {
        let analysis = engine_with(&[1.0]).analyze(&["rice".to_string()]).unwrap();
        let rice = &analysis.detections[0];
        assert_eq!(rice.matched_name, "Rice");
        assert_eq!(rice.calories, 130.0);
        assert_eq!(rice.macros.protein, 2.7);
        assert_eq!(rice.macros.carbohydrate, 28.2);
        assert_eq!(rice.macros.fat, 0.3);
        assert_eq!(rice.estimated_grams, 100);
        assert_eq!(analysis.total_calories, 130.0);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let analysis = engine_with(&[1.0])
            .analyze(&["Chicken CURRY".to_string()])
            .unwrap();
        assert_eq!(analysis.detections[0].matched_name, "Chicken Curry");
        assert_eq!(analysis.detections[0].calories, 250.0);
    }

    #[test]
    fn test_unknown_food_degrades_without_failing() {
        let analysis = engine_with(&[1.0])
            .analyze(&["dragonfruit smoothie".to_string(), "rice".to_string()])
            .unwrap();
        let unknown = &analysis.detections[0];
        assert!(unknown.matched_name.contains("Unknown Food"));
        assert_eq!(unknown.calories, 0.0);
        assert_eq!(unknown.macros.protein, 0.0);
        assert_eq!(unknown.micros.fiber, 0.0);
        assert_eq!(unknown.estimated_grams, 0);
        // the recognized item in the same batch is unaffected
        assert_eq!(analysis.detections[1].calories, 130.0);
        assert_eq!(analysis.total_calories, 130.0);
    }

    #[test]
    fn test_empty_batch_is_a_pipeline_failure() {
        let result = engine_with(&[]).analyze(&[]);
        assert!(matches!(result, Err(EngineError::EmptyResult(_))));
    }

    #[test]
    fn test_total_is_exact_sum_of_item_calories() {
        let analysis = engine_with(&[1.0, 1.1])
            .analyze(&["rice".to_string(), "roti".to_string()])
            .unwrap();
        let sum: f64 = analysis.detections.iter().map(|d| d.calories).sum();
        assert_eq!(analysis.total_calories, sum);
    }

    #[test]
    fn test_fields_rounded_to_one_decimal() {
        let analysis = engine_with(&[1.11]).analyze(&["dal".to_string()]).unwrap();
        let dal = &analysis.detections[0];
        assert_eq!(dal.calories, 122.1);
        assert_eq!(dal.macros.protein, 10.0);
        assert_eq!(dal.macros.carbohydrate, 22.2);
        assert_eq!(dal.micros.fiber, 8.9);
        assert_eq!(dal.estimated_grams, 111);
    }

    #[test]
    fn test_recognizer_draws_from_table_order() {
        let table = Arc::new(NutrientTable::builtin());
        let recognizer = RuleBasedFoodRecognizer::new(
            table,
            Arc::new(ScriptedEntropy::new(&[2, 0, 3], &[])),
        );
        let names = recognizer
            .recognize("https://example.com/meal.jpg", "user-1")
            .unwrap();
        assert_eq!(names, vec!["rice", "chicken curry"]);
    }

    #[test]
    fn test_serving_factor_stays_in_band() {
        let table = Arc::new(NutrientTable::builtin());
        let entropy = Arc::new(crate::services::entropy::SeededEntropy::new(9));
        let engine = NutritionEngine::new(table, entropy);
        for _ in 0..100 {
            let analysis = engine.analyze(&["biryani".to_string()]).unwrap();
            let factor = analysis.detections[0].serving_factor;
            assert!((SERVING_FACTOR_LO..SERVING_FACTOR_HI).contains(&factor));
        }
    }
}
