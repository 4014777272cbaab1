//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Connections come from a `bb8` pool through `diesel-async`. Row structs and
//! table definitions stay private to this module; repositories translate them
//! into domain types and map every database failure into
//! [`crate::domain::ports::UserPersistenceError`].
//!
//! # Example
//!
//! ```ignore
//! use signup_backend::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/signup").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/signup")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
