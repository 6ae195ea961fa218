//! API auth handlers: token issuance, the session bridge, and the profile
//! lookup.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;

use cantina_core::error::AppError;

use crate::dto::request::{LoginRequest, SessionRequest};
use crate::dto::response::{AckResponse, ApiResponse, ProfileResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Verifies credentials and answers with a bearer token. No session is
/// created here; a token holder opts into cookie flows via the bridge.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    let user = state
        .credential_verifier
        .authenticate(&req.email, &req.secret)
        .await?;

    let issued = state.jwt_encoder.issue(&user.email)?;
    tracing::info!(email = %user.email, "Token issued");

    Ok(Json(ApiResponse::ok(TokenResponse {
        token: issued.token,
        expires_at: issued.expires_at,
    })))
}

/// POST /api/auth/session
///
/// Exchanges a valid token for a server session, delivered as a cookie.
/// All failures collapse to one 401; no cookie is set on any of them.
pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SessionRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AckResponse>>), ApiError> {
    let session = state.session_manager.bridge_token(&req.token).await?;

    let jar = jar.add(state.session_cookie(session.id));
    Ok((jar, Json(ApiResponse::ok(AckResponse { ok: true }))))
}

/// GET /api/profile
pub async fn profile(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User no longer exists"))?;

    Ok(Json(ApiResponse::ok(ProfileResponse::from(&user))))
}
