//! Coach Responder Port

use async_trait::async_trait;

use crate::domain::{CoachReply, DialogueTurn, EngineError};

/// Produces one coaching reply for one dialogue turn.
///
/// Async: the responder may suspend (a scripted one simulates processing
/// time, an LLM-backed one awaits the model). Cancellation discards the
/// in-flight computation with no side effects.
#[async_trait]
pub trait CoachResponder: Send + Sync {
    async fn respond(&self, turn: &DialogueTurn) -> Result<CoachReply, EngineError>;
}
