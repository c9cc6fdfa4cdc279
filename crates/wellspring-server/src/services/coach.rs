//! Coaching Dialogue Responder
//!
//! Scripted implementation of the `CoachResponder` port: a personalized
//! greeting from the context snapshot, one intent-keyword rule per reply,
//! and suggestion tags derived by scanning the generated response text.
//! The text scan is deliberate indirection - future response templates
//! change suggestion derivation without touching intent matching. An
//! LLM-backed responder replaces this behind the same port.

use std::time::Duration;

use async_trait::async_trait;

use wellspring::domain::{CoachReply, DialogueTurn, EngineError};
use wellspring::ports::CoachResponder;

/// Trigger phrases scanned in the response text, with the suggestion each
/// one yields
const SUGGESTION_TRIGGERS: &[(&str, &str)] = &[
    ("meditation", "Try a 5-minute guided meditation"),
    ("yoga", "Explore beginner yoga poses"),
    ("meal plan", "Generate a personalized meal plan"),
];

/// Context defaults applied when the snapshot omits a key
const DEFAULT_MOOD: &str = "neutral";
const DEFAULT_LAST_WORKOUT: &str = "yesterday";
const DEFAULT_GOALS: &[&str] = &["lose weight", "reduce stress"];

/// Canned-template responder with a simulated processing delay
///
/// The delay is a bounded, cancellable suspension; dropping the future
/// discards the in-flight reply with no side effects.
pub struct ScriptedCoach {
    delay: Duration,
}

impl ScriptedCoach {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn greeting(&self, turn: &DialogueTurn) -> String {
        let mood = turn.context_str("recent_mood").unwrap_or(DEFAULT_MOOD);
        let last_workout = turn
            .context_str("last_workout")
            .unwrap_or(DEFAULT_LAST_WORKOUT);
        let goals = turn.context_list("goals");
        let goals: Vec<&str> = if goals.is_empty() {
            DEFAULT_GOALS.to_vec()
        } else {
            goals
        };

        let mut greeting = format!(
            "Hi there! Based on your recent activities, I see your mood is {mood} and you last worked out {last_workout}."
        );
        if goals.contains(&"reduce stress") {
            greeting.push_str(" It looks like you're aiming to reduce stress.");
        }
        greeting
    }

    /// First matching intent rule wins; the order is fixed
    fn compose(&self, turn: &DialogueTurn) -> String {
        let message = turn.message.to_lowercase();
        if message.contains("hello") {
            format!(
                "{} How can I help you today with your wellness journey?",
                self.greeting(turn)
            )
        } else if message.contains("diet") {
            "I can help with diet! Would you like a meal plan, calorie tracking, or something else?"
                .to_string()
        } else if message.contains("stress") {
            "I understand you're feeling stressed. Perhaps a short meditation or a gentle yoga \
             session could help? I can suggest one for you."
                .to_string()
        } else if message.contains("workout") {
            "Let's talk about your workouts! What are your fitness goals, or do you need a new \
             routine?"
                .to_string()
        } else {
            format!(
                "Thanks for reaching out! I'm here to assist you. You mentioned: '{}'. What \
                 specifically would you like to focus on?",
                turn.message
            )
        }
    }
}

#[async_trait]
impl CoachResponder for ScriptedCoach {
    async fn respond(&self, turn: &DialogueTurn) -> Result<CoachReply, EngineError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let response = self.compose(turn);
        let suggestions = derive_suggestions(&response);
        Ok(CoachReply {
            response,
            suggestions,
        })
    }
}

/// Suggestions come from the response text alone, never from the matched
/// intent
fn derive_suggestions(response: &str) -> Vec<String> {
    let lowered = response.to_lowercase();
    SUGGESTION_TRIGGERS
        .iter()
        .filter(|(trigger, _)| lowered.contains(trigger))
        .map(|(_, suggestion)| suggestion.to_string())
        .collect()
}
