//! Per-request authentication resolution.
//!
//! Each pipeline installs one resolver that produces at most one
//! [`AuthIdentity`] into request extensions. Resolution never errors: every
//! failure mode (absent header, malformed token, unknown subject, dead
//! session) collapses to "no identity", and the authorization layer decides
//! whether that is acceptable for the route.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use cantina_entity::session::AuthIdentity;

use crate::state::AppState;

/// Routes the API resolver skips entirely: first-time callers have no token
/// yet, and re-resolving identity on the token-issue endpoints is useless.
const API_AUTH_PREFIX: &str = "/api/auth";

/// Reads the session identifier out of the cookie jar, if present and
/// well-formed.
pub(crate) fn session_id_from_jar(state: &AppState, jar: &CookieJar) -> Option<Uuid> {
    jar.get(&state.config.session.cookie_name)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// Resolver for the API pipeline: session identity first, bearer token
/// second.
pub async fn resolve_api(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    let bypass = path == API_AUTH_PREFIX || path.starts_with("/api/auth/");

    if !bypass {
        if let Some(identity) = resolve_identity(&state, &jar, request.headers(), true).await {
            request.extensions_mut().insert(identity);
        }
    }

    next.run(request).await
}

/// Resolver for the web pipeline: the session cookie is the only identity
/// carrier. Bearer tokens are deliberately not honored here.
pub async fn resolve_web(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(identity) = resolve_identity(&state, &jar, request.headers(), false).await {
        request.extensions_mut().insert(identity);
    }

    next.run(request).await
}

/// Attempts session resolution, then (optionally) bearer-token resolution.
///
/// An established session wins outright: when one is present, the
/// Authorization header is not even parsed, so a stray token can never
/// re-resolve identity mid-session. Token resolution writes to the request
/// extensions only; it never creates a session. That happens solely through
/// the explicit session bridge.
async fn resolve_identity(
    state: &AppState,
    jar: &CookieJar,
    headers: &HeaderMap,
    allow_bearer: bool,
) -> Option<AuthIdentity> {
    if let Some(session_id) = session_id_from_jar(state, jar) {
        if let Some(identity) = state.session_manager.resolve(session_id) {
            return Some(identity);
        }
    }

    if !allow_bearer {
        return None;
    }

    let raw = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))?;

    if !state.jwt_decoder.verify(raw) {
        tracing::debug!("Bearer token failed verification");
        return None;
    }

    let subject = state.jwt_decoder.extract_subject(raw).ok()?;

    match state.users.find_by_email(&subject).await {
        Ok(Some(user)) => Some(AuthIdentity::from(&user)),
        Ok(None) => {
            tracing::debug!(subject, "Token subject no longer resolves to a principal");
            None
        }
        Err(e) => {
            tracing::debug!(error = %e, "Principal lookup failed during token resolution");
            None
        }
    }
}
