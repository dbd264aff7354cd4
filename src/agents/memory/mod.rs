//! Conversation memory
//!
//! Each session owns one [`ConversationState`]: an append-only interaction log
//! plus the trip facts gathered so far. [`SessionStore`] keeps them in process
//! memory, one async mutex per session.

mod store;

pub use store::{SessionHandle, SessionStore, DEFAULT_SESSION};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Interaction log and trip facts for one session
#[derive(Debug, Clone)]
pub struct ConversationState {
    history: Vec<String>,
    trip_facts: IndexMap<String, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            history: Vec::new(),
            trip_facts: IndexMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append `User: {text}` to the log
    pub fn record_user_message(&mut self, text: &str) {
        self.history.push(format!("User: {}", text));
        self.touch();
    }

    /// Append `Assistant: {text}` to the log
    pub fn record_assistant_message(&mut self, text: &str) {
        self.history.push(format!("Assistant: {}", text));
        self.touch();
    }

    /// Merge facts into the map.
    ///
    /// Existing keys are overwritten in place; new keys are appended.
    pub fn merge_trip_facts<I, K, V>(&mut self, facts: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in facts {
            self.trip_facts.insert(key.into(), value.into());
        }
        self.touch();
    }

    /// Value of a fact, or `""` when unset
    pub fn trip_fact(&self, key: &str) -> &str {
        self.trip_facts.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn trip_facts(&self) -> &IndexMap<String, String> {
        &self.trip_facts
    }

    /// `key:value` pairs separated by single spaces, in insertion order
    pub fn trip_facts_summary(&self) -> String {
        self.trip_facts
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The log joined by newlines, oldest first
    pub fn full_history(&self) -> String {
        self.history.join("\n")
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Serializable view of this state
    pub fn snapshot(&self, session_id: &str) -> SessionSnapshot {
        SessionSnapshot {
            session_id: session_id.to_string(),
            trip_facts: self.trip_facts.clone(),
            history: self.history.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Point-in-time copy of a session, returned by the inspection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub trip_facts: IndexMap<String, String>,
    pub history: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let state = ConversationState::new();
        assert_eq!(state.trip_facts_summary(), "");
        assert_eq!(state.full_history(), "");
        assert_eq!(state.trip_fact("arrival_city"), "");
    }

    #[test]
    fn test_merge_overwrites_in_place() {
        let mut state = ConversationState::new();
        state.merge_trip_facts([("a", "1"), ("b", "x")]);
        state.merge_trip_facts([("a", "2")]);

        assert_eq!(state.trip_facts_summary(), "a:2 b:x");
        assert_eq!(state.trip_fact("a"), "2");
    }

    #[test]
    fn test_history_order() {
        let mut state = ConversationState::new();
        state.record_user_message("Is it raining in Oslo?");
        state.record_assistant_message("Bring an umbrella.");

        assert_eq!(
            state.full_history(),
            "User: Is it raining in Oslo?\nAssistant: Bring an umbrella."
        );
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_snapshot() {
        let mut state = ConversationState::new();
        state.merge_trip_facts([("arrival_city", "Lisbon")]);
        state.record_user_message("hotel ideas?");

        let snapshot = state.snapshot("abc");
        assert_eq!(snapshot.session_id, "abc");
        assert_eq!(snapshot.trip_facts["arrival_city"], "Lisbon");
        assert!(snapshot.updated_at >= snapshot.created_at);
    }
}
