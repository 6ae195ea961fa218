//! Browser account flows: signup, form login, logout, and the profile page.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;

use cantina_core::error::AppError;
use cantina_entity::user::{CreateUser, Role, User};

use crate::dto::request::{LoginForm, SignupForm};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::middleware::authn::session_id_from_jar;
use crate::state::AppState;

/// POST /signup
///
/// Registers a Client account. Staff accounts are provisioned out of band,
/// never through the public form.
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    let password_hash = match state.password_hasher.hash(&form.secret) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "Password hashing failed during signup");
            return Redirect::to("/signup?error=true").into_response();
        }
    };

    let user = User::from_create(CreateUser {
        name: form.name,
        email: form.email,
        password_hash,
        address: form.address.filter(|a| !a.is_empty()),
        role: Role::Client,
    });

    match state.users.insert(user).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "Account created");
            Redirect::to("/login").into_response()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Signup rejected");
            Redirect::to("/signup?error=true").into_response()
        }
    }
}

/// POST /login
///
/// On success the previous session (if any) is migrated to a fresh
/// identifier and the browser is sent where its role belongs. On failure
/// the login page gets one generic error flag.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    let previous = session_id_from_jar(&state, &jar);

    match state
        .session_manager
        .login(&form.email, &form.secret, previous)
        .await
    {
        Ok((user, session)) => {
            let jar = jar.add(state.session_cookie(session.id));
            let target = match user.role {
                Role::Staff => "/admin",
                Role::Client => "/menu",
            };
            (jar, Redirect::to(target)).into_response()
        }
        Err(_) => Redirect::to("/login?error=true").into_response(),
    }
}

/// POST /logout
///
/// Safe to call without a live session; a stale cookie is cleared either
/// way.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(session_id) = session_id_from_jar(&state, &jar) {
        state.session_manager.logout(session_id);
    }

    let jar = jar.remove(state.clear_session_cookie());
    (jar, Redirect::to("/?logout=true")).into_response()
}

/// GET /profile
pub async fn profile_page(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Html<String>, ApiError> {
    let user = state
        .users
        .find_by_id(identity.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User no longer exists"))?;

    let address = user.address.as_deref().unwrap_or("not set");
    Ok(Html(format!(
        "<!doctype html><html><body><h1>Your profile</h1>\
         <p>Name: {}</p><p>Email: {}</p><p>Address: {address}</p>\
         <form method=\"post\" action=\"/logout\"><button>Logout</button></form>\
         </body></html>",
        user.name, user.email
    )))
}
