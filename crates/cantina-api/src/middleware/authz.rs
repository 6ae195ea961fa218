//! Authorization enforcement per pipeline.
//!
//! Both pipelines evaluate the same kind of ordered rule table; they differ
//! only in how a rejection is presented. The API answers with JSON status
//! codes, the browser pipeline with a redirect to the login entry point or
//! a forbidden page. The policy decision itself is identical.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Redirect, Response};

use cantina_auth::policy::Decision;
use cantina_core::error::AppError;
use cantina_entity::session::AuthIdentity;

use crate::error::ApiError;
use crate::state::AppState;

const FORBIDDEN_PAGE: &str =
    "<!doctype html><html><body><h1>Forbidden</h1><p>Your account may not view this page.</p></body></html>";

/// Gate for the API pipeline: 401 for unresolved identity, 403 for an
/// insufficient role.
pub async fn authorize_api(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let identity = request.extensions().get::<AuthIdentity>();

    match state.api_rules.evaluate(request.uri().path(), identity) {
        Decision::Granted => next.run(request).await,
        Decision::Unauthenticated => {
            ApiError::from(AppError::authentication("authentication required")).into_response()
        }
        Decision::Forbidden => {
            ApiError::from(AppError::authorization("insufficient role")).into_response()
        }
    }
}

/// Gate for the web pipeline: a missing identity redirects to the login
/// page, a role mismatch renders the forbidden page.
pub async fn authorize_web(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let identity = request.extensions().get::<AuthIdentity>();

    match state.web_rules.evaluate(request.uri().path(), identity) {
        Decision::Granted => next.run(request).await,
        Decision::Unauthenticated => Redirect::to("/login").into_response(),
        Decision::Forbidden => (StatusCode::FORBIDDEN, Html(FORBIDDEN_PAGE)).into_response(),
    }
}
