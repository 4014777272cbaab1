//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM.
//! - **memory**: process-local repository for running without a database.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
