//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on domain
//! driving ports, so they can be exercised without I/O.

use std::sync::Arc;

use crate::domain::UserAccountsService;
use crate::domain::ports::{UserRegistration, UserRepository, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub registration: Arc<dyn UserRegistration>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, registration: Arc<dyn UserRegistration>) -> Self {
        Self {
            users,
            registration,
        }
    }

    /// Wire both ports to one [`UserAccountsService`] over `repo`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use signup_backend::inbound::http::state::HttpState;
    /// use signup_backend::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryUserRepository::new()));
    /// let _users = state.users.clone();
    /// ```
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: UserRepository + 'static,
    {
        let service = Arc::new(UserAccountsService::new(repo));
        Self::new(service.clone(), service)
    }
}
