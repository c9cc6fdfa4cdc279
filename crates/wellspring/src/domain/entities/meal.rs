//! Meal Analysis - Nutrient reference records and scaled detections

use serde::{Deserialize, Serialize};

/// One entry of the static nutrient reference table
///
/// Nutrient values are per reference serving. The table is keyed by
/// canonical lowercase name and read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientRecord {
    pub name: String,
    pub calories: f64,
    pub protein_g: f64,
    pub carbohydrate_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
    pub sodium_mg: f64,
    pub reference_serving_g: u32,
}

/// Macronutrients of one scaled detection, grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Macronutrients {
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
}

/// Micronutrients of one scaled detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Micronutrients {
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

/// One detected food item with serving-scaled nutrients
///
/// An unrecognized candidate yields a zeroed detection whose name carries
/// the "Unknown Food" marker instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetection {
    pub matched_name: String,
    /// Portion adjustment relative to the reference serving, in [0.8, 1.2]
    pub serving_factor: f64,
    pub estimated_grams: u32,
    pub calories: f64,
    pub macros: Macronutrients,
    pub micros: Micronutrients,
}

impl FoodDetection {
    /// Zeroed detection for a candidate the table does not know
    pub fn unknown(candidate: &str) -> Self {
        Self {
            matched_name: format!("Unknown Food ({candidate})"),
            serving_factor: 1.0,
            estimated_grams: 0,
            calories: 0.0,
            macros: Macronutrients {
                protein: 0.0,
                carbohydrate: 0.0,
                fat: 0.0,
            },
            micros: Micronutrients {
                fiber: 0.0,
                sugar: 0.0,
                sodium: 0.0,
            },
        }
    }
}

/// Aggregated result of one meal analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAnalysis {
    pub detections: Vec<FoodDetection>,
    /// Sum of per-item calories; the sum itself is never re-rounded
    pub total_calories: f64,
}
