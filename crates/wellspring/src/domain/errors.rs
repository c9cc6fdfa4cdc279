//! Engine Errors
//!
//! Error taxonomy for the signal-estimation pipelines. Component-level
//! partial failures (one unrecognized food item) are absorbed into a
//! degraded result and never reach this type; pipeline-level failures do.

use thiserror::Error;

/// Signal-estimation engine errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed or missing request input, rejected before any estimator runs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Image URL or frame payload that cannot be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// A pipeline produced zero usable items
    #[error("No usable results: {0}")]
    EmptyResult(String),

    /// Any other unexpected failure; never silently swallowed
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn validation<T: Into<String>>(detail: T) -> Self {
        Self::Validation(detail.into())
    }

    pub fn decode<T: Into<String>>(detail: T) -> Self {
        Self::Decode(detail.into())
    }

    pub fn empty_result<T: Into<String>>(detail: T) -> Self {
        Self::EmptyResult(detail.into())
    }

    pub fn internal<T: Into<String>>(detail: T) -> Self {
        Self::Internal(detail.into())
    }
}
