use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide store of outstanding OTP challenges, keyed by email.
///
/// At most one live challenge per email; issuing a new code silently
/// replaces the previous one. Entries carry no expiry: a stored code stays
/// valid until replaced, for the lifetime of the process.
pub struct ChallengeStore {
    challenges: Arc<RwLock<HashMap<String, String>>>,
}

impl ChallengeStore {
    pub fn new() -> Self {
        Self {
            challenges: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store a challenge for an email, replacing any prior value
    pub async fn put(&self, email: &str, code: String) {
        let mut challenges = self.challenges.write().await;
        challenges.insert(email.to_string(), code);
    }

    /// Check a submitted code against the stored challenge.
    ///
    /// Exact string equality; neither side is trimmed.
    pub async fn matches(&self, email: &str, code: &str) -> bool {
        let challenges = self.challenges.read().await;
        challenges
            .get(email)
            .map(|stored| stored == code)
            .unwrap_or(false)
    }

    /// Whether any challenge is outstanding for this email
    pub async fn contains(&self, email: &str) -> bool {
        let challenges = self.challenges.read().await;
        challenges.contains_key(email)
    }
}

impl Default for ChallengeStore {
    fn default() -> Self {
        Self::new()
    }
}
