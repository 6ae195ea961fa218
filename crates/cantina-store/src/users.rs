//! User store contract and in-memory implementation.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use cantina_core::result::AppResult;
use cantina_core::AppError;
use cantina_entity::user::User;

/// Principal lookup and registration contract.
///
/// The authentication subsystem treats this as an external collaborator: a
/// lookup may block on I/O in other backends, so callers must not hold any
/// lock across a call.
#[async_trait]
pub trait UserStore: std::fmt::Debug + Send + Sync + 'static {
    /// Resolve a login identifier to a user record.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Register a new user. Fails with a conflict if the email is taken.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Count registered users.
    async fn count(&self) -> AppResult<u64>;
}

/// Concurrent in-memory user store.
///
/// Keyed by id with a secondary email index. The email index entry is the
/// uniqueness guard: registration claims the email slot before publishing
/// the record.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    by_id: DashMap<Uuid, User>,
    email_index: DashMap<String, Uuid>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let id = match self.email_index.get(email) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.by_id.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.by_id.get(&id).map(|u| u.value().clone()))
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        match self.email_index.entry(user.email.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Email already registered: {}",
                user.email
            ))),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.by_id.insert(user.id, user.clone());
                tracing::debug!(user_id = %user.id, "User registered");
                Ok(user)
            }
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.by_id.len() as u64)
    }
}
