//! `CurrentUser` extractor: the identity the pipeline resolver placed in
//! request extensions.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cantina_core::error::AppError;
use cantina_entity::session::AuthIdentity;

use crate::error::ApiError;

/// The authenticated principal for the current request.
///
/// Handlers take this to require an identity; the resolver middleware has
/// already done the session/token work, so extraction is a lookup, never a
/// re-resolution.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthIdentity);

impl std::ops::Deref for CurrentUser {
    type Target = AuthIdentity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthIdentity>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::from(AppError::authentication("authentication required")))
    }
}
