//! In-memory `UserRepository` used when no database is configured.
//!
//! Data lives for the life of the process. Ids start at 1 and increase
//! monotonically. The write lock is held across the uniqueness check and the
//! insert, so a duplicate email can never be stored.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, NewUser, User, UserId};

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<UserId, User>,
    last_id: i32,
}

/// Process-local user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: RwLock<Store>,
}

impl InMemoryUserRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.store.write().await;
        if store.users.values().any(|user| user.email() == &new_user.email) {
            return Err(UserPersistenceError::duplicate_email(new_user.email.as_ref()));
        }

        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id space exhausted"))?;
        let id = UserId::new(next)
            .map_err(|err| UserPersistenceError::query(format!("invalid user id: {err}")))?;
        let user = User::from_new(id, new_user.clone());
        store.last_id = next;
        store.users.insert(id, user.clone());
        Ok(user)
    }
}
