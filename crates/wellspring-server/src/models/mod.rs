//! Wire Models
//!
//! Request/response DTOs for the four pipelines, camelCase on the wire,
//! plus the structured error body every failure path returns.

mod coach;
mod error;
mod journal;
mod meal;
mod pose;

pub use coach::*;
pub use error::*;
pub use journal::*;
pub use meal::*;
pub use pose::*;
