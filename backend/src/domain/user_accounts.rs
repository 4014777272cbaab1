//! User account domain service.
//!
//! Implements the [`UsersQuery`] and [`UserRegistration`] driving ports over
//! any [`UserRepository`]. Registration checks for an existing email first and
//! still maps a unique-constraint clash from the store to the same conflict, so
//! concurrent registrations for one address produce exactly one account.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRegistration, UserRepository, UsersQuery};
use crate::domain::{Error, NewUser, User, UserId};

/// Message returned when registering an email that is already taken.
pub const USER_EXISTS_MESSAGE: &str = "User existed!!";

/// Account service implementing the user driving ports.
#[derive(Clone)]
pub struct UserAccountsService<R> {
    repo: Arc<R>,
}

impl<R> UserAccountsService<R> {
    /// Create a new service backed by `repo`.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> UserAccountsService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateEmail { .. } => Error::conflict(USER_EXISTS_MESSAGE),
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserAccountsService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repo
            .list_all()
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[async_trait]
impl<R> UserRegistration for UserAccountsService<R>
where
    R: UserRepository,
{
    async fn register(&self, new_user: NewUser) -> Result<User, Error> {
        let existing = self
            .repo
            .find_by_email(&new_user.email)
            .await
            .map_err(Self::map_persistence_error)?;
        if existing.is_some() {
            debug!(email = %new_user.email, "registration rejected: email taken");
            return Err(Error::conflict(USER_EXISTS_MESSAGE));
        }

        let user = self
            .repo
            .create(&new_user)
            .await
            .map_err(Self::map_persistence_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}
