//! Pending login state between the authorize redirect and the callback.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use oauth2::PkceCodeVerifier;
use tokio::sync::RwLock;

/// How long a login may stay pending before its state is discarded.
const DEFAULT_TTL: Duration = Duration::from_secs(600);

struct PendingLogin {
    verifier: PkceCodeVerifier,
    started: Instant,
}

/// Table of in-flight logins keyed by the OAuth2 state parameter.
///
/// Each state can be taken exactly once. Entries older than the TTL are
/// swept on insert and refused on take; abandoned logins never pile up
/// past one sweep interval.
#[derive(Clone)]
pub struct PendingLogins {
    ttl: Duration,
    inner: Arc<RwLock<HashMap<String, PendingLogin>>>,
}

impl PendingLogins {
    /// Creates an empty table with the default ten-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates an empty table with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records a new pending login, sweeping expired entries first.
    pub async fn insert(&self, state: String, verifier: PkceCodeVerifier) {
        let mut logins = self.inner.write().await;
        logins.retain(|_, login| login.started.elapsed() < self.ttl);
        logins.insert(
            state,
            PendingLogin {
                verifier,
                started: Instant::now(),
            },
        );
    }

    /// Takes the verifier for a state, if present and not expired.
    pub async fn take(&self, state: &str) -> Option<PkceCodeVerifier> {
        let mut logins = self.inner.write().await;
        let login = logins.remove(state)?;
        if login.started.elapsed() >= self.ttl {
            return None;
        }
        Some(login.verifier)
    }

    /// Number of logins currently pending.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns true if no logins are pending.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl Default for PendingLogins {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier(value: &str) -> PkceCodeVerifier {
        PkceCodeVerifier::new(value.to_string())
    }

    #[tokio::test]
    async fn test_take_returns_the_verifier_exactly_once() {
        let pending = PendingLogins::new();
        pending.insert("state-1".into(), verifier("verifier-1")).await;
        assert_eq!(pending.len().await, 1);

        let taken = pending.take("state-1").await.unwrap();
        assert_eq!(taken.secret(), "verifier-1");

        assert!(pending.take("state-1").await.is_none());
        assert!(pending.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_state_yields_nothing() {
        let pending = PendingLogins::new();
        assert!(pending.take("never-inserted").await.is_none());
    }

    #[tokio::test]
    async fn test_expired_state_is_refused() {
        let pending = PendingLogins::with_ttl(Duration::ZERO);
        pending.insert("state-1".into(), verifier("verifier-1")).await;
        assert!(pending.take("state-1").await.is_none());
    }

    #[tokio::test]
    async fn test_insert_sweeps_expired_entries() {
        let pending = PendingLogins::with_ttl(Duration::ZERO);
        pending.insert("state-1".into(), verifier("verifier-1")).await;
        pending.insert("state-2".into(), verifier("verifier-2")).await;

        // The first entry was swept when the second arrived.
        assert_eq!(pending.len().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_states_are_independent() {
        let pending = PendingLogins::new();
        pending.insert("state-a".into(), verifier("verifier-a")).await;
        pending.insert("state-b".into(), verifier("verifier-b")).await;

        let b = pending.take("state-b").await.unwrap();
        assert_eq!(b.secret(), "verifier-b");
        assert_eq!(pending.len().await, 1);
    }
}
