//! Wellspring Domain Entities
//!
//! - Journal: text sentiment analysis and stress/burnout risk indices
//! - Meal: nutrient records and scaled food detections
//! - Workout: pose quality score and joint-level feedback
//! - Dialogue: one coaching turn and its reply
//!
//! Every entity is created per request and discarded with the response.

mod dialogue;
mod journal;
mod meal;
mod workout;

pub use dialogue::*;
pub use journal::*;
pub use meal::*;
pub use workout::*;
