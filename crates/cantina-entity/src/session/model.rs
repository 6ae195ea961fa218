//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::{Role, User};

/// The identity snapshot bound to a session or resolved from a token.
///
/// Carries everything downstream authorization needs without another
/// principal lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthIdentity {
    /// The principal's stable identifier.
    pub user_id: Uuid,
    /// Login email (the token subject).
    pub email: String,
    /// Privilege class at resolution time.
    pub role: Role,
}

impl From<&User> for AuthIdentity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Server-held session state, addressed by an opaque identifier delivered
/// via cookie.
///
/// At most one authenticated principal per session; the identity is set at
/// creation and never rebound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session identifier.
    pub id: Uuid,
    /// The principal bound to this session.
    pub identity: AuthIdentity,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// Absolute expiry; the session is dead past this instant regardless of
    /// activity.
    pub expires_at: DateTime<Utc>,
    /// Last time a request carried this session.
    pub last_activity: DateTime<Utc>,
}
