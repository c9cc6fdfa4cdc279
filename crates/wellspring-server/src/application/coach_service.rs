//! Coaching Pipeline (Use Case)

use std::collections::HashMap;
use std::sync::Arc;

use wellspring::domain::{CoachReply, DialogueTurn, EngineError};
use wellspring::ports::CoachResponder;

/// Coaching chat pipeline over a pluggable responder
pub struct CoachService<C: CoachResponder> {
    responder: Arc<C>,
}

impl<C: CoachResponder> CoachService<C> {
    pub fn new(responder: Arc<C>) -> Self {
        Self { responder }
    }

    pub async fn chat(
        &self,
        user_id: &str,
        message: &str,
        context: Option<HashMap<String, serde_json::Value>>,
    ) -> Result<CoachReply, EngineError> {
        if message.trim().is_empty() {
            return Err(EngineError::validation("message must not be empty"));
        }
        let turn = DialogueTurn {
            user_id: user_id.to_string(),
            message: message.to_string(),
            context: context.unwrap_or_default(),
        };
        self.responder.respond(&turn).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::coach::ScriptedCoach;
    use std::time::Duration;

    fn service() -> CoachService<ScriptedCoach> {
        CoachService::new(Arc::new(ScriptedCoach::new(Duration::ZERO)))
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let result = service().chat("user-1", "   ", None).await;
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[tokio::test]
    async fn test_chat_round_trip() {
        let reply = service()
            .chat("user-1", "stress is piling up", None)
            .await
            .unwrap();
        assert!(!reply.suggestions.is_empty());
    }
}
