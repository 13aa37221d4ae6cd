use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::config::DEFAULT_SESSION_TTL_MINUTES;
use crate::errors::AppError;
use crate::models::session::Session;

/// In-memory session contexts keyed by id.
///
/// The lock is never held across an LLM call: handlers take a snapshot, do their
/// slow work, then commit through `update`, which re-checks state under the lock.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    /// Negative or out-of-range TTLs fall back to the default.
    pub fn new(ttl_minutes: i64) -> Self {
        let ttl = Duration::try_minutes(ttl_minutes)
            .filter(|ttl| *ttl >= Duration::zero())
            .unwrap_or_else(|| Duration::minutes(DEFAULT_SESSION_TTL_MINUTES));
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a fresh session, pruning sessions idle for longer than the TTL.
    pub async fn create(&self) -> Session {
        let now = Utc::now();
        let session = Session::new(Uuid::new_v4(), now);

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.ttl);
        if sessions.len() < before {
            debug!("Pruned {} idle sessions", before - sessions.len());
        }
        sessions.insert(session.id, session.clone());
        session
    }

    /// Returns a snapshot of the session.
    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.update(id, |session| Ok(session.clone())).await
    }

    /// Applies `f` to the session under the write lock.
    pub async fn update<T, F>(&self, id: Uuid, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Session) -> Result<T, AppError>,
    {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        session.last_seen = Utc::now();
        f(session)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::new(60);
        let session = store.create().await;
        let fetched = store.get(session.id).await.unwrap();
        assert_eq!(fetched.id, session.id);
        assert!(!fetched.analysis_done());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = SessionStore::new(60);
        let err = store.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_is_visible_to_later_reads() {
        let store = SessionStore::new(60);
        let id = store.create().await.id;
        store
            .update(id, |s| {
                s.jd_text = Some("Backend engineer".to_string());
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(
            store.get(id).await.unwrap().jd_text.as_deref(),
            Some("Backend engineer")
        );
    }

    #[tokio::test]
    async fn test_update_error_propagates() {
        let store = SessionStore::new(60);
        let id = store.create().await.id;
        let result: Result<(), AppError> = store
            .update(id, |_| Err(AppError::Conflict("busy".to_string())))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_idle_sessions_are_pruned_on_create() {
        let store = SessionStore::new(0);
        let stale = store.create().await.id;
        store
            .update(stale, |s| {
                s.last_seen = Utc::now() - Duration::minutes(5);
                Ok(())
            })
            .await
            .unwrap();
        store.create().await;
        assert_eq!(store.len().await, 1);
        assert!(store.get(stale).await.is_err());
    }

    #[tokio::test]
    async fn test_unusable_ttl_keeps_live_sessions() {
        for ttl in [-1, i64::MAX] {
            let store = SessionStore::new(ttl);
            let first = store.create().await.id;
            store.create().await;
            assert_eq!(store.len().await, 2);
            assert!(store.get(first).await.is_ok());
        }
    }
}
