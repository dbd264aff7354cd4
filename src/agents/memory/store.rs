//! In-memory session store

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use super::{ConversationState, SessionSnapshot};

/// Session used when a request carries no id
pub const DEFAULT_SESSION: &str = "default";

// Sessions are never evicted. Each new client-supplied id stays in memory
// until `DELETE /sessions/:id` removes it.

/// Shared handle to one session's state
pub type SessionHandle = Arc<Mutex<ConversationState>>;

/// In-memory arena of conversation states keyed by session id
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session, creating an empty one on first use
    pub async fn session(&self, session_id: &str) -> SessionHandle {
        if let Some(handle) = self.sessions.read().await.get(session_id) {
            return handle.clone();
        }

        let mut sessions = self.sessions.write().await;
        let live = sessions.len();
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(session_id, live, "creating session");
                Arc::new(Mutex::new(ConversationState::new()))
            })
            .clone()
    }

    /// Snapshot of an existing session
    pub async fn get(&self, session_id: &str) -> Option<SessionSnapshot> {
        let handle = self.sessions.read().await.get(session_id).cloned()?;
        let state = handle.lock().await;
        Some(state.snapshot(session_id))
    }

    /// Remove a session. Returns false when it did not exist.
    pub async fn remove(&self, session_id: &str) -> bool {
        self.sessions.write().await.remove(session_id).is_some()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_is_shared() {
        let store = SessionStore::new();

        store
            .session("s1")
            .await
            .lock()
            .await
            .merge_trip_facts([("arrival_city", "Rome")]);

        let handle = store.session("s1").await;
        assert_eq!(handle.lock().await.trip_fact("arrival_city"), "Rome");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        store
            .session("a")
            .await
            .lock()
            .await
            .merge_trip_facts([("adults", "2")]);

        let other = store.session("b").await;
        assert_eq!(other.lock().await.trip_facts_summary(), "");
        assert!(store.get("a").await.is_some());
        assert!(store.get("b").await.is_some());
    }

    #[tokio::test]
    async fn test_get_and_remove() {
        let store = SessionStore::new();
        assert!(store.get(DEFAULT_SESSION).await.is_none());

        store.session(DEFAULT_SESSION).await;
        assert!(store.get(DEFAULT_SESSION).await.is_some());

        assert!(store.remove(DEFAULT_SESSION).await);
        assert!(!store.remove(DEFAULT_SESSION).await);
        assert!(store.get(DEFAULT_SESSION).await.is_none());
    }
}
