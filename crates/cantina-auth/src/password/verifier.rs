//! Credential verification against the principal store.

use std::sync::Arc;

use cantina_core::error::AppError;
use cantina_entity::user::User;
use cantina_store::UserStore;

use super::hasher::PasswordHasher;

/// The single outward failure message for every login failure mode.
///
/// Unknown principal, credential mismatch, and store trouble are
/// indistinguishable to the caller; distinguishing them would let a client
/// probe which accounts exist.
const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Checks a presented secret against a principal's stored proof.
#[derive(Clone)]
pub struct CredentialVerifier {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier").finish()
    }
}

impl CredentialVerifier {
    /// Creates a verifier over the given principal store.
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// Authenticates a login identifier + secret pair.
    ///
    /// Success returns the principal with its role populated. Every failure
    /// collapses to one generic authentication error; internal reasons are
    /// only visible in debug logs.
    pub async fn authenticate(&self, email: &str, secret: &str) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Principal lookup failed during login");
                AppError::authentication(INVALID_CREDENTIALS)
            })?
            .ok_or_else(|| {
                tracing::debug!(email, "Login attempt for unknown principal");
                AppError::authentication(INVALID_CREDENTIALS)
            })?;

        let matches = self
            .hasher
            .verify(secret, &user.password_hash)
            .map_err(|e| {
                tracing::debug!(error = %e, "Stored credential proof unreadable");
                AppError::authentication(INVALID_CREDENTIALS)
            })?;

        if !matches {
            tracing::debug!(email, "Credential mismatch");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        Ok(user)
    }
}
