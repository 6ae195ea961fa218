//! # cantina-auth
//!
//! The dual-mode authentication core: token encoding/verification,
//! credential checking, server-side sessions (including the token-to-session
//! bridge), and the route authorization policy.

pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{CredentialVerifier, PasswordHasher};
pub use policy::{Decision, Requirement, RuleSet};
pub use session::{SessionManager, SessionStore};
