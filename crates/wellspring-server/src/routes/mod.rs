//! Wellspring API Routes
//!
//! - /api/v1/ai/journal-nlp - journal sentiment + stress/burnout indices
//! - /api/v1/ai/meal-ocr - meal photo nutrition estimation
//! - /api/v1/ai/pose-detection - workout form scoring and feedback
//! - /api/v1/ai/coach-chat - scripted coaching responder

pub mod coach;
pub mod journal;
pub mod meal;
pub mod pose;
pub mod swagger;
