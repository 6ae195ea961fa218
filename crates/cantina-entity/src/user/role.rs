//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Privilege classes available to a principal.
///
/// Roles are a flat allow-list, not a lattice: every authorization check
/// matches the role exactly, so Staff gains no implicit access to
/// Client-only routes and vice versa. New roles are added by extending this
/// enumeration together with the rule tables that reference it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A customer: owns a cart and a profile.
    Client,
    /// An employee: manages products and orders.
    Staff,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = cantina_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "staff" => Ok(Self::Staff),
            _ => Err(cantina_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: client, staff"
            ))),
        }
    }
}
