//! In-memory session registry.
//!
//! Maps an opaque token (carried in the `sessionId` cookie) to the username
//! it was issued for and an expiry instant. Sessions are not persisted: a
//! restart logs everybody out. Each login gets its own token, so a user may
//! hold any number of concurrent sessions.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::types::Timestamp;

/// Expiry given to sessions when no TTL is configured: the largest signed
/// 32-bit Unix timestamp (2038-01-19T03:14:07Z).
pub const FAR_FUTURE_EPOCH_SECS: i64 = 2_147_483_647;

/// A live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub expires_at: Timestamp,
}

impl Session {
    /// Whether the session has expired relative to `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

/// Token → session map shared by all request handlers.
///
/// Thread-safe via interior `RwLock`; wrap in `Arc` and share through
/// application state.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Option<Duration>,
}

impl SessionRegistry {
    /// Create an empty registry. `ttl` of `None` issues sessions that expire
    /// at [`FAR_FUTURE_EPOCH_SECS`].
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Expiry instant for a session issued now. A TTL that would overflow
    /// the calendar falls back to [`FAR_FUTURE_EPOCH_SECS`].
    fn next_expiry(&self) -> Timestamp {
        self.ttl
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .unwrap_or_else(far_future)
    }

    /// Issue a new session for `username` and return its token.
    pub async fn create(&self, username: &str) -> String {
        let expires_at = self.next_expiry();
        self.create_with_expiry(username, expires_at).await
    }

    /// Issue a session with an explicit expiry.
    pub async fn create_with_expiry(&self, username: &str, expires_at: Timestamp) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        let session = Session {
            username: username.to_string(),
            expires_at,
        };
        self.sessions.write().await.insert(token.clone(), session);
        tracing::debug!(%username, %expires_at, "Session created");
        token
    }

    /// Resolve a token to its session.
    ///
    /// Unknown tokens yield `None`. Expired sessions are removed and also
    /// yield `None`.
    pub async fn check(&self, token: &str) -> Option<Session> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                None => return None,
                Some(session) if !session.is_expired_at(now) => return Some(session.clone()),
                Some(_) => {}
            }
        }

        // Re-check under the write lock; another request may have replaced
        // or removed the entry in between.
        let mut sessions = self.sessions.write().await;
        if sessions.get(token).is_some_and(|s| s.is_expired_at(now)) {
            if let Some(expired) = sessions.remove(token) {
                tracing::info!(username = %expired.username, "Expired session removed");
            }
        }
        None
    }

    /// Remove a session. Returns `true` if the token was present.
    pub async fn destroy(&self, token: &str) -> bool {
        self.sessions.write().await.remove(token).is_some()
    }

    /// Remove every session issued for `username`. Returns how many were
    /// removed.
    pub async fn destroy_user(&self, username: &str) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.username != username);
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::info!(%username, removed, "Sessions ended for user");
        }
        removed
    }

    /// Number of sessions currently held (including not-yet-swept expired ones).
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

fn far_future() -> Timestamp {
    DateTime::from_timestamp(FAR_FUTURE_EPOCH_SECS, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_session_is_found() {
        let registry = SessionRegistry::default();
        let token = registry.create("ana").await;

        let session = registry.check(&token).await.expect("session should exist");
        assert_eq!(session.username, "ana");
        assert_eq!(session.expires_at.timestamp(), FAR_FUTURE_EPOCH_SECS);
    }

    #[tokio::test]
    async fn unknown_token_is_unauthenticated() {
        let registry = SessionRegistry::default();
        registry.create("ana").await;

        assert!(registry.check("not-a-token").await.is_none());
        assert!(registry.check("").await.is_none());
    }

    #[tokio::test]
    async fn each_login_gets_its_own_token() {
        let registry = SessionRegistry::default();
        let first = registry.create("ana").await;
        let second = registry.create("ana").await;

        assert_ne!(first, second);
        assert_eq!(registry.len().await, 2);

        assert!(registry.destroy(&first).await);
        assert!(registry.check(&first).await.is_none());
        assert!(registry.check(&second).await.is_some());
    }

    #[tokio::test]
    async fn expired_session_is_removed_on_check() {
        let registry = SessionRegistry::default();
        let token = registry
            .create_with_expiry("ana", Utc::now() - Duration::seconds(1))
            .await;
        assert_eq!(registry.len().await, 1);

        assert!(registry.check(&token).await.is_none());
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn ttl_sets_expiry_relative_to_now() {
        let registry = SessionRegistry::new(Some(Duration::minutes(30)));
        let token = registry.create("ana").await;

        let session = registry.check(&token).await.unwrap();
        let remaining = session.expires_at - Utc::now();
        assert!(remaining > Duration::minutes(29));
        assert!(remaining <= Duration::minutes(30));
    }

    #[tokio::test]
    async fn destroy_user_ends_every_session_for_that_name() {
        let registry = SessionRegistry::default();
        let first = registry.create("ana").await;
        let second = registry.create("ana").await;
        let other = registry.create("bob").await;

        assert_eq!(registry.destroy_user("ana").await, 2);
        assert!(registry.check(&first).await.is_none());
        assert!(registry.check(&second).await.is_none());
        assert!(registry.check(&other).await.is_some());
        assert_eq!(registry.destroy_user("ana").await, 0);
    }

    #[tokio::test]
    async fn overflowing_ttl_falls_back_to_far_future() {
        let huge = Duration::try_seconds(i64::MAX / 1_000).expect("within TimeDelta range");
        let registry = SessionRegistry::new(Some(huge));
        let token = registry.create("ana").await;

        let session = registry.check(&token).await.expect("session should exist");
        assert_eq!(session.expires_at.timestamp(), FAR_FUTURE_EPOCH_SECS);
    }

    #[tokio::test]
    async fn destroy_unknown_token_is_false() {
        let registry = SessionRegistry::default();
        assert!(!registry.destroy("missing").await);
    }
}
