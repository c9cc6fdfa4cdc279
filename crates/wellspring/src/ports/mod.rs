//! Ports (Interfaces)
//!
//! Abstract interfaces between the pipelines and whatever produces their
//! estimates. The rule-based implementations live in the server crate;
//! trained-model-backed variants can replace them without touching the
//! pipeline call contracts.

pub mod entropy;
pub mod estimators;

// Re-exports
pub use entropy::*;
pub use estimators::*;
