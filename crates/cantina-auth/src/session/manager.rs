//! Session lifecycle manager: credential login, the token-to-session
//! bridge, and logout.

use std::sync::Arc;

use uuid::Uuid;

use cantina_core::error::AppError;
use cantina_entity::session::{AuthIdentity, Session};
use cantina_entity::user::User;
use cantina_store::UserStore;

use crate::jwt::JwtDecoder;
use crate::password::CredentialVerifier;

use super::store::SessionStore;

/// The single outward message for every bridge failure.
///
/// Invalid token and unresolvable principal are collapsed so a caller
/// cannot use the bridge to test which subjects exist.
const INVALID_TOKEN: &str = "invalid token";

/// Manages the complete session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<SessionStore>,
    decoder: Arc<JwtDecoder>,
    users: Arc<dyn UserStore>,
    verifier: CredentialVerifier,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        store: Arc<SessionStore>,
        decoder: Arc<JwtDecoder>,
        users: Arc<dyn UserStore>,
        verifier: CredentialVerifier,
    ) -> Self {
        Self {
            store,
            decoder,
            users,
            verifier,
        }
    }

    /// Binds an identity into a brand-new session.
    ///
    /// If the request carried a previous session identifier it is
    /// invalidated first: privilege escalation always migrates to a fresh
    /// identifier (session fixation defense).
    pub fn establish(&self, identity: AuthIdentity, previous: Option<Uuid>) -> Session {
        if let Some(old) = previous {
            self.store.invalidate(old);
        }
        let session = self.store.create(identity);
        tracing::info!(session_id = %session.id, email = %session.identity.email, "Session established");
        session
    }

    /// Resolves a session identifier to its identity, if still live.
    pub fn resolve(&self, id: Uuid) -> Option<AuthIdentity> {
        self.store.resolve(id)
    }

    /// Number of live server sessions.
    pub fn active_sessions(&self) -> usize {
        self.store.len()
    }

    /// Invalidates a session on logout.
    pub fn logout(&self, id: Uuid) {
        if self.store.invalidate(id) {
            tracing::info!(session_id = %id, "Session invalidated");
        }
    }

    /// Authenticates credentials and establishes a fresh session.
    pub async fn login(
        &self,
        email: &str,
        secret: &str,
        previous: Option<Uuid>,
    ) -> Result<(User, Session), AppError> {
        let user = self.verifier.authenticate(email, secret).await?;
        let session = self.establish(AuthIdentity::from(&user), previous);
        Ok((user, session))
    }

    /// Mints a server session from a valid bearer token.
    ///
    /// This is the join point that lets a token-authenticated client also
    /// participate in cookie-based flows. A new session is always created;
    /// a pre-existing anonymous session is never adopted. Calling twice
    /// with the same valid token re-establishes the same identity under a
    /// new identifier; there is no exactly-once requirement here.
    pub async fn bridge_token(&self, raw: &str) -> Result<Session, AppError> {
        if !self.decoder.verify(raw) {
            tracing::debug!("Session bridge rejected: token failed verification");
            return Err(AppError::authentication(INVALID_TOKEN));
        }

        let subject = self.decoder.extract_subject(raw).map_err(|e| {
            tracing::debug!(error = %e, "Session bridge rejected: subject extraction failed");
            AppError::authentication(INVALID_TOKEN)
        })?;

        let user = match self.users.find_by_email(&subject).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::debug!(subject, "Session bridge rejected: principal not found");
                return Err(AppError::authentication(INVALID_TOKEN));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Session bridge rejected: principal lookup failed");
                return Err(AppError::authentication(INVALID_TOKEN));
            }
        };

        Ok(self.establish(AuthIdentity::from(&user), None))
    }
}
