//! Value Objects
//!
//! Immutable value types shared across the domain.

mod sentiment_label;

pub use sentiment_label::*;
