//! Meal Analysis DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use wellspring::domain::{FoodDetection, Macronutrients, MealAnalysis, Micronutrients};

/// Meal analysis request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysisRequest {
    pub image_url: String,
    pub user_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MacronutrientsBody {
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
}

impl From<Macronutrients> for MacronutrientsBody {
    fn from(macros: Macronutrients) -> Self {
        Self {
            protein: macros.protein,
            carbohydrate: macros.carbohydrate,
            fat: macros.fat,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MicronutrientsBody {
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl From<Micronutrients> for MicronutrientsBody {
    fn from(micros: Micronutrients) -> Self {
        Self {
            fiber: micros.fiber,
            sugar: micros.sugar,
            sodium: micros.sodium,
        }
    }
}

/// One serving-scaled detection
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetectionBody {
    pub matched_name: String,
    pub serving_factor: f64,
    pub estimated_grams: u32,
    pub calories: f64,
    pub macros: MacronutrientsBody,
    pub micros: MicronutrientsBody,
}

impl From<FoodDetection> for FoodDetectionBody {
    fn from(detection: FoodDetection) -> Self {
        Self {
            matched_name: detection.matched_name,
            serving_factor: detection.serving_factor,
            estimated_grams: detection.estimated_grams,
            calories: detection.calories,
            macros: detection.macros.into(),
            micros: detection.micros.into(),
        }
    }
}

/// Meal analysis response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealAnalysisResponse {
    pub total_calories: f64,
    pub estimated_foods: Vec<FoodDetectionBody>,
    pub accuracy_score: f64,
}

impl MealAnalysisResponse {
    pub fn new(analysis: MealAnalysis, accuracy_score: f64) -> Self {
        Self {
            total_calories: analysis.total_calories,
            estimated_foods: analysis.detections.into_iter().map(Into::into).collect(),
            accuracy_score,
        }
    }
}
