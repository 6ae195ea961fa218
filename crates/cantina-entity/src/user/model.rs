//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// A registered user in the Cantina system.
///
/// Read-only from the authentication subsystem's perspective: the role is
/// assigned at creation and mutated, if ever, by user management.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Human-readable display name.
    pub name: String,
    /// Login identifier; unique, used as the token subject.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Delivery address (optional).
    pub address: Option<String>,
    /// Privilege class.
    pub role: Role,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Delivery address (optional).
    pub address: Option<String>,
    /// Assigned role.
    pub role: Role,
}

impl User {
    /// Build a user from creation data with a fresh identifier.
    pub fn from_create(data: CreateUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            address: data.address,
            role: data.role,
            created_at: Utc::now(),
        }
    }
}
