//! Concurrent in-memory session storage.

use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use cantina_core::config::SessionConfig;
use cantina_entity::session::{AuthIdentity, Session};

/// Holds live sessions keyed by their opaque identifier.
///
/// Per-session state is only touched by requests carrying that session's
/// identifier, so per-key map atomicity is the only locking needed. Expiry
/// is passive: dead sessions are detected and dropped at lookup time, not
/// swept by a background task.
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, Session>,
    config: SessionConfig,
}

impl SessionStore {
    /// Creates an empty store with the given timeout configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
        }
    }

    /// Creates a session binding `identity` under a fresh identifier.
    ///
    /// An existing identifier is never reused, so a caller can always
    /// migrate away from a possibly fixated session by creating a new one.
    pub fn create(&self, identity: AuthIdentity) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            identity,
            created_at: now,
            expires_at: now + Duration::hours(self.config.absolute_timeout_hours as i64),
            last_activity: now,
        };
        self.sessions.insert(session.id, session.clone());
        session
    }

    /// Resolves a session identifier to its bound identity.
    ///
    /// Checks absolute expiry and idle timeout at use time; a dead session
    /// is removed and resolves to `None`. A live session has its activity
    /// timestamp touched.
    pub fn resolve(&self, id: Uuid) -> Option<AuthIdentity> {
        let now = Utc::now();
        let idle_cutoff = now - Duration::minutes(self.config.idle_timeout_minutes as i64);

        {
            if let Some(mut session) = self.sessions.get_mut(&id) {
                if now < session.expires_at && session.last_activity > idle_cutoff {
                    session.last_activity = now;
                    return Some(session.identity.clone());
                }
            } else {
                return None;
            }
        }

        // Expired or idle: drop it outside the entry guard.
        self.sessions.remove(&id);
        None
    }

    /// Removes a session. Returns true if one existed.
    pub fn invalidate(&self, id: Uuid) -> bool {
        self.sessions.remove(&id).is_some()
    }

    /// Number of live (not yet reaped) sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are held.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn force_expire(&self, id: Uuid) {
        if let Some(mut session) = self.sessions.get_mut(&id) {
            session.expires_at = Utc::now() - Duration::hours(1);
        }
    }

    #[cfg(test)]
    pub(crate) fn force_idle(&self, id: Uuid) {
        if let Some(mut session) = self.sessions.get_mut(&id) {
            session.last_activity = Utc::now() - Duration::hours(1);
        }
    }
}
