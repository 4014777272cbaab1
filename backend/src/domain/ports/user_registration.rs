//! Driving port for account registration.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User};

/// Domain use-case port for creating accounts.
///
/// A registration whose email is already taken fails with
/// [`crate::domain::ErrorCode::Conflict`] and leaves the store unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Create a user from `new_user`.
    async fn register(&self, new_user: NewUser) -> Result<User, Error>;
}
