//! Wellspring Domain Library
//!
//! Core domain types and interfaces for the Wellspring signal-estimation
//! engine: journal sentiment and risk indices, meal nutrition estimates,
//! workout form feedback, and coaching replies.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure per-request value types and logic
//!   - `entities/`: Analysis results (TextAnalysis, FoodDetection, PoseAnalysis, CoachReply)
//!   - `value_objects/`: Immutable value types (SentimentLabel)
//!   - `errors/`: The engine error taxonomy
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `estimators/`: One capability per pipeline, rule-based today,
//!     model-backed tomorrow, same call contract either way
//!   - `entropy/`: Injectable randomness for simulated inference
//!
//! # Usage
//!
//! ```rust,ignore
//! use wellspring::domain::{TextAnalysis, RiskEstimate, FoodDetection};
//! use wellspring::ports::{SentimentEstimator, EntropySource};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    CoachReply, DialogueTurn, EngineError, FoodDetection, Macronutrients, MealAnalysis,
    Micronutrients, NutrientRecord, PoseAnalysis, PoseFeedbackItem, RiskEstimate, SentimentLabel,
    TextAnalysis,
};
pub use ports::{
    CoachResponder, EntropySource, FoodRecognizer, PoseEstimator, SentimentEstimator,
};
