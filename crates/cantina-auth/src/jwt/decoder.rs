//! Token validation and subject extraction.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use cantina_core::config::AuthConfig;
use cantina_core::error::AppError;

use super::claims::Claims;

/// Validates bearer tokens against the configured signing key.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Returns true iff the signature validates under the configured key
    /// and the expiry has not elapsed.
    ///
    /// Malformed structure, signature mismatch, and expiry all collapse to
    /// `false`; the caller never learns which check failed.
    pub fn verify(&self, raw: &str) -> bool {
        self.decode_token(raw).is_ok()
    }

    /// Returns the subject claim of a valid token.
    ///
    /// Callers must [`verify`](Self::verify) before extracting; this method
    /// revalidates rather than trusting unverified claims, so an invalid
    /// token yields an error instead of a forged subject.
    pub fn extract_subject(&self, raw: &str) -> Result<String, AppError> {
        let claims = self.decode_token(raw)?;
        Ok(claims.sub)
    }

    fn decode_token(&self, raw: &str) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(raw, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::authentication(format!("Token validation failed: {e}")))?;
        Ok(token_data.claims)
    }
}
