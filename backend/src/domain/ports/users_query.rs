//! Driving port for user lookups.
//!
//! Inbound adapters read users through this port without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every registered user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with `id`, or `None` when absent.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error>;
}
