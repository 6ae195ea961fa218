//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login identifier.
    pub email: String,
    /// Plaintext secret.
    pub secret: String,
}

/// Session bridge request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// A previously issued bearer token.
    pub token: String,
}

/// Cart line addition (API body and web form share the shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemRequest {
    /// Product to add.
    pub product_id: Uuid,
    /// Quantity to add.
    pub quantity: u32,
}

/// Cart line removal form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartRemoveForm {
    /// Product to remove.
    pub product_id: Uuid,
}

/// Browser login form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    /// Login identifier.
    pub email: String,
    /// Plaintext secret.
    pub secret: String,
}

/// Browser signup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    /// Display name.
    pub name: String,
    /// Login identifier.
    pub email: String,
    /// Plaintext secret.
    pub secret: String,
    /// Delivery address (optional).
    pub address: Option<String>,
}
