//! Client side of the signup application.
//!
//! The browser components of the web client are modelled here as plain
//! state machines: [`register_form::RegisterForm`] owns the registration form
//! and [`user_list::UserListPage`] the home page listing. Both talk to the
//! backend through the [`api::UsersApi`] port and navigate through the
//! [`navigation::Navigator`] port, so they run equally well behind the
//! terminal front end and in tests.

pub mod api;
pub mod config;
pub mod navigation;
pub mod register_form;
pub mod user_list;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{ApiError, HttpUsersApi, RegisterRequest, UserSummary, UsersApi};
pub use config::ClientConfig;
pub use navigation::{History, Navigator, Route};
pub use register_form::{RegisterForm, RegisterView, SubmitOutcome};
pub use user_list::{ListState, UserListPage};
pub use validation::{Field, FieldErrors};
