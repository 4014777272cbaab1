//! Domain primitives, ports and services.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifiers.
//! - TraceId: request-scoped correlation identifier.
//! - User and its value types: the registered account record.
//! - UserAccountsService: registration and lookup use-cases over a
//!   [`ports::UserRepository`].

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_accounts;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    Email, NewUser, Password, RESERVED_FIELDS, User, UserAttributes, UserId, UserValidationError,
};
pub use self::user_accounts::{USER_EXISTS_MESSAGE, UserAccountsService};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use signup_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::conflict("User existed!!"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
