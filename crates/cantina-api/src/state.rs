//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};
use uuid::Uuid;

use cantina_auth::jwt::{JwtDecoder, JwtEncoder};
use cantina_auth::password::{CredentialVerifier, PasswordHasher};
use cantina_auth::policy::RuleSet;
use cantina_auth::session::SessionManager;
use cantina_core::config::AppConfig;
use cantina_store::{CartStore, UserStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// Principal store (external collaborator).
    pub users: Arc<dyn UserStore>,
    /// Per-user cart storage.
    pub carts: Arc<CartStore>,

    /// Token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (argon2id).
    pub password_hasher: PasswordHasher,
    /// Credential verification against the principal store.
    pub credential_verifier: CredentialVerifier,
    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,

    /// Ordered authorization rules for the API pipeline.
    pub api_rules: Arc<RuleSet>,
    /// Ordered authorization rules for the web pipeline.
    pub web_rules: Arc<RuleSet>,
}

impl AppState {
    /// Builds the session cookie carrying the given session identifier.
    pub fn session_cookie(&self, session_id: Uuid) -> Cookie<'static> {
        Cookie::build((
            self.config.session.cookie_name.clone(),
            session_id.to_string(),
        ))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
    }

    /// Builds a cookie matching the session cookie's name and path, for
    /// removal on logout.
    pub fn clear_session_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.config.session.cookie_name.clone(), ""))
            .path("/")
            .build()
    }
}
