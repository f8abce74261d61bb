//! In-memory session store.
//!
//! Each visitor gets one [`AssessmentFlow`] behind a random [`SessionId`].
//! Every read and mutation runs to completion under the store's lock, so a
//! caller never observes a half-applied event. Nothing here is persisted:
//! sessions disappear on close, on restart, or after sitting idle past the
//! TTL.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::{FlowError, SessionError};
use crate::flow::AssessmentFlow;

/// Opaque session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug)]
struct SessionEntry {
    flow: AssessmentFlow,
    last_seen: DateTime<Utc>,
}

/// All live assessment sessions.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
    ttl: Duration,
    max_sessions: Option<usize>,
}

impl SessionStore {
    /// Create an empty store. Sessions idle longer than `ttl` expire.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
            max_sessions: None,
        }
    }

    /// Cap the number of live sessions. `open` fails once the cap is reached
    /// and no idle session can be reclaimed.
    #[must_use]
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = Some(max_sessions);
        self
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a new session with a fresh flow in `Intro`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Capacity`] when the store is full of live
    /// sessions.
    pub async fn open(&self) -> Result<SessionId, SessionError> {
        self.open_at(Utc::now()).await
    }

    async fn open_at(&self, now: DateTime<Utc>) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.write().await;

        if let Some(limit) = self.max_sessions {
            if sessions.len() >= limit {
                sessions.retain(|_, entry| !self.is_expired(entry, now));
            }
            if sessions.len() >= limit {
                return Err(SessionError::Capacity { limit });
            }
        }

        let id = SessionId::new();
        let entry = SessionEntry {
            flow: AssessmentFlow::new(),
            last_seen: now,
        };
        sessions.insert(id, entry);
        debug!(session_id = %id, "session opened");
        Ok(id)
    }

    /// Read the flow.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] or [`SessionError::Expired`].
    pub async fn read<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&AssessmentFlow) -> R,
    ) -> Result<R, SessionError> {
        self.with_entry(id, Utc::now(), |flow| f(flow)).await
    }

    /// Mutate the flow.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] or [`SessionError::Expired`].
    pub async fn update<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut AssessmentFlow) -> R,
    ) -> Result<R, SessionError> {
        self.with_entry(id, Utc::now(), f).await
    }

    /// Mutate the flow with an operation that can itself fail.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`], [`SessionError::Expired`], or the
    /// operation's [`FlowError`] wrapped in [`SessionError::Flow`].
    pub async fn try_update<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut AssessmentFlow) -> Result<R, FlowError>,
    ) -> Result<R, SessionError> {
        Ok(self.update(id, f).await??)
    }

    /// Drop a session. Closing an unknown id is not an error.
    pub async fn close(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            debug!(session_id = %id, "session closed");
        }
        removed
    }

    /// Number of live sessions, expired ones included until purged.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Remove every session idle past the TTL. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now()).await
    }

    async fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_expired(entry, now));
        before.saturating_sub(sessions.len())
    }

    async fn with_entry<R>(
        &self,
        id: SessionId,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut AssessmentFlow) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id).ok_or(SessionError::NotFound { id })?;

        if self.is_expired(entry, now) {
            sessions.remove(&id);
            debug!(session_id = %id, "session expired");
            return Err(SessionError::Expired { id });
        }

        entry.last_seen = now;
        Ok(f(&mut entry.flow))
    }

    fn is_expired(&self, entry: &SessionEntry, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.last_seen) > self.ttl
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::flow::Stage;

    fn store() -> SessionStore {
        SessionStore::new(Duration::minutes(30))
    }

    #[tokio::test]
    async fn open_starts_at_intro() {
        let store = store();
        let id = store.open().await.unwrap();
        let stage = store.read(id, AssessmentFlow::stage).await.unwrap();
        assert_eq!(stage, Stage::Intro);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let store = store();
        let a = store.open().await.unwrap();
        let b = store.open().await.unwrap();
        assert_ne!(a, b);

        store.update(a, |flow| flow.start()).await.unwrap();
        assert_eq!(store.read(a, AssessmentFlow::stage).await.unwrap(), Stage::Questionnaire);
        assert_eq!(store.read(b, AssessmentFlow::stage).await.unwrap(), Stage::Intro);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = store();
        let id = SessionId::new();
        let err = store.read(id, AssessmentFlow::stage).await.unwrap_err();
        assert_eq!(err, SessionError::NotFound { id });
    }

    #[tokio::test]
    async fn flow_errors_pass_through_try_update() {
        let store = store();
        let id = store.open().await.unwrap();
        let err = store
            .try_update(id, |flow| flow.record_answer(1, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::Flow(FlowError::WrongStage { .. })));
    }

    #[tokio::test]
    async fn idle_session_expires_and_is_dropped() {
        let store = store();
        let id = store.open().await.unwrap();
        let later = Utc::now() + Duration::minutes(31);

        let err = store.with_entry(id, later, |_| ()).await.unwrap_err();
        assert_eq!(err, SessionError::Expired { id });
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn activity_extends_the_session() {
        let store = store();
        let id = store.open().await.unwrap();
        let t1 = Utc::now() + Duration::minutes(20);
        store.with_entry(id, t1, |_| ()).await.unwrap();

        let t2 = t1 + Duration::minutes(20);
        assert!(store.with_entry(id, t2, |_| ()).await.is_ok());
    }

    #[tokio::test]
    async fn purge_removes_only_idle_sessions() {
        let store = store();
        let stale = store.open().await.unwrap();
        let fresh = store.open().await.unwrap();

        let touched = Utc::now() + Duration::minutes(20);
        store.with_entry(fresh, touched, |_| ()).await.unwrap();

        let later = Utc::now() + Duration::minutes(31);
        assert_eq!(store.purge_expired_at(later).await, 1);
        assert_eq!(store.len().await, 1);
        assert!(store.with_entry(fresh, later, |_| ()).await.is_ok());
        assert!(matches!(
            store.read(stale, AssessmentFlow::stage).await,
            Err(SessionError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn full_store_refuses_new_sessions() {
        let store = store().with_max_sessions(2);
        store.open().await.unwrap();
        store.open().await.unwrap();

        let err = store.open().await.unwrap_err();
        assert_eq!(err, SessionError::Capacity { limit: 2 });
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn full_store_reclaims_idle_sessions() {
        let store = store().with_max_sessions(1);
        let stale = store.open().await.unwrap();

        let later = Utc::now() + Duration::minutes(31);
        let id = store.open_at(later).await.unwrap();
        assert_ne!(id, stale);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn close_is_idempotent() {
        let store = store();
        let id = store.open().await.unwrap();
        assert!(store.close(id).await);
        assert!(!store.close(id).await);
    }

    #[test]
    fn session_id_round_trips_through_text() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
