//! Estimator Ports
//!
//! One capability per pipeline. Each has exactly one rule-based
//! implementation today; the traits leave room for trained-model-backed
//! variants with the same call contract.

mod coach;
mod nutrition;
mod pose;
mod sentiment;

pub use coach::*;
pub use nutrition::*;
pub use pose::*;
pub use sentiment::*;
