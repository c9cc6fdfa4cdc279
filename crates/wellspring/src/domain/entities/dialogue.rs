//! Dialogue - One coaching chat turn and its reply

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One user message plus the context snapshot it arrived with
///
/// Consumed exactly once; never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueTurn {
    pub user_id: String,
    pub message: String,
    /// Arbitrary user-context values (recent mood, last workout, goals, ...)
    pub context: HashMap<String, serde_json::Value>,
}

impl DialogueTurn {
    pub fn new(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
            context: HashMap::new(),
        }
    }

    /// Context value as a string, if present and a string
    pub fn context_str(&self, key: &str) -> Option<&str> {
        self.context.get(key).and_then(|v| v.as_str())
    }

    /// Context value as a list of strings, if present and an array
    pub fn context_list(&self, key: &str) -> Vec<&str> {
        self.context
            .get(key)
            .and_then(|v| v.as_array())
            .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}

/// The responder's reply: one response text plus derived suggestion tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachReply {
    pub response: String,
    pub suggestions: Vec<String>,
}
