//! Application Layer (Use Cases)
//!
//! One pipeline service per endpoint. Each validates and decodes the raw
//! request input, then calls exactly one estimator; no pipeline depends on
//! another at runtime.

mod coach_service;
mod journal_service;
mod meal_service;
mod workout_service;

pub use coach_service::CoachService;
pub use journal_service::JournalService;
pub use meal_service::{MealService, ACCURACY_SCORE};
pub use workout_service::WorkoutService;
