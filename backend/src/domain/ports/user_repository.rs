//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Email, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Insert hit the unique email constraint.
        DuplicateEmail { email: String } => "user with email {email} already exists",
    }
}

/// Storage for registered users.
///
/// Users are inserted once and never updated or deleted. Implementations must
/// enforce email uniqueness themselves and report a clash as
/// [`UserPersistenceError::DuplicateEmail`], even when the caller checked
/// beforehand.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user in ascending id order.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by exact email match.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a user and return it with its assigned id.
    async fn create(&self, new_user: &NewUser) -> Result<User, UserPersistenceError>;
}
