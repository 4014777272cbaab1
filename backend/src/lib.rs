//! Signup backend: user registration and listing over a REST API.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: user model, error type, ports and the account service.
//! - [`inbound`]: Actix HTTP handlers.
//! - [`outbound`]: Diesel and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
