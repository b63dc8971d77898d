use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Session token (random UUID)
pub type SessionToken = String;

/// Idle minutes before a session expires
const IDLE_TIMEOUT_MINUTES: i64 = 30;

/// Session data stored after successful OTP verification
#[derive(Clone, Debug)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub last_seen: DateTime<Utc>,
}

/// In-memory session store
///
/// Sessions expire after 30 idle minutes; every successful read pushes the
/// window forward.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a new session and return the token
    pub async fn create_session(&self, session: Session) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Get session by token, refreshing its idle window
    pub async fn get_session(&self, token: &str) -> Option<Session> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(token)?;

        let now = Utc::now();
        if now.signed_duration_since(session.last_seen).num_minutes() >= IDLE_TIMEOUT_MINUTES {
            // Session expired
            sessions.remove(token);
            return None;
        }

        session.last_seen = now;
        Some(session.clone())
    }

    /// Delete session (logout)
    pub async fn delete_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Clean up idle sessions (run periodically)
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        sessions.retain(|_, session| {
            now.signed_duration_since(session.last_seen).num_minutes() < IDLE_TIMEOUT_MINUTES
        });
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_seen(minutes_ago: i64) -> Session {
        Session {
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            last_seen: Utc::now() - chrono::Duration::minutes(minutes_ago),
        }
    }

    #[tokio::test]
    async fn test_session_creation() {
        let store = SessionStore::new();
        let token = store.create_session(session_seen(0)).await;
        assert!(!token.is_empty());

        let retrieved = store.get_session(&token).await;
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_idle_expiration() {
        let store = SessionStore::new();
        let token = store.create_session(session_seen(31)).await;

        let retrieved = store.get_session(&token).await;
        assert!(retrieved.is_none(), "Idle session should return None");
    }

    #[tokio::test]
    async fn test_read_refreshes_idle_window() {
        let store = SessionStore::new();
        let token = store.create_session(session_seen(29)).await;

        // First read lands inside the window and refreshes it
        assert!(store.get_session(&token).await.is_some());
        assert!(store.get_session(&token).await.is_some());
    }

    #[tokio::test]
    async fn test_delete_session() {
        let store = SessionStore::new();
        let token = store.create_session(session_seen(0)).await;

        store.delete_session(&token).await;
        assert!(store.get_session(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_cleanup_retains_live_sessions() {
        let store = SessionStore::new();
        let live = store.create_session(session_seen(5)).await;
        let stale = store.create_session(session_seen(45)).await;

        store.cleanup_expired().await;

        assert!(store.get_session(&live).await.is_some());
        assert!(store.get_session(&stale).await.is_none());
    }
}
