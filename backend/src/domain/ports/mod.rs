//! Domain ports for the hexagonal boundary.
//!
//! Driven ports ([`UserRepository`]) are implemented by persistence adapters.
//! Driving ports ([`UsersQuery`], [`UserRegistration`]) are what inbound
//! adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod user_registration;
mod user_repository;
mod users_query;

pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use users_query::MockUsersQuery;
