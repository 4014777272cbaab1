//! Registration form state machine.
//!
//! Typing re-validates the touched field only. Submitting replaces the error
//! map with the required-field checks, reapplies the field rules when both
//! values are present, and talks to the backend only when nothing failed.

use std::fmt;

use tracing::{info, warn};

use crate::api::{ApiError, RegisterRequest, UserSummary, UsersApi};
use crate::navigation::{Navigator, Route};
use crate::validation::{Field, FieldErrors, required_errors, validate_field};

/// Fallback when a rejected registration carries no readable message.
pub const REGISTRATION_FAILED: &str = "Registration failed";
/// Shown when the request never produced a usable response.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

const HEADING: &str = "Sign Up";
const SUBMIT_LABEL: &str = "Sign Up";

/// Result of [`RegisterForm::on_submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was sent.
    Invalid,
    /// The backend accepted the registration and the form navigated home.
    ///
    /// Holds the created user when the response body described one.
    Registered(Option<UserSummary>),
    /// The request was sent but failed; see [`RegisterForm::api_error`].
    Failed,
}

/// Registration form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    email: String,
    password: String,
    errors: FieldErrors,
    api_error: String,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message from the last failed submission, if any.
    pub fn api_error(&self) -> Option<&str> {
        (!self.api_error.is_empty()).then_some(self.api_error.as_str())
    }

    /// Update the field named `name` and re-validate it.
    ///
    /// Returns `false`, leaving the form untouched, when `name` is not a form
    /// field.
    ///
    /// # Examples
    /// ```
    /// use signup_frontend::{Field, RegisterForm};
    ///
    /// let mut form = RegisterForm::new();
    /// assert!(form.on_field_change("email", "not-an-email"));
    /// assert_eq!(form.errors().get(Field::Email), Some("Invalid email format"));
    /// assert!(!form.on_field_change("nickname", "ada"));
    /// ```
    pub fn on_field_change(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(field) = Field::from_name(name) else {
            return false;
        };
        let value = value.into();
        self.errors.set(field, validate_field(field, &value));
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
        true
    }

    /// Validate and submit the form.
    pub async fn on_submit(
        &mut self,
        api: &dyn UsersApi,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        let mut errors = required_errors(&self.email, &self.password);
        if errors.is_empty() {
            for field in Field::ALL {
                errors.set(field, validate_field(field, self.value(field)));
            }
        }
        self.errors = errors;
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid;
        }

        let request = RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        match api.register(&request).await {
            Ok(user) => {
                info!(user_id = user.as_ref().map(|created| created.id), "registration succeeded");
                self.api_error.clear();
                navigator.navigate(Route::Home);
                SubmitOutcome::Registered(user)
            }
            Err(error) => {
                warn!(%error, "registration failed");
                self.api_error = failure_message(error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Render model of the current state.
    pub fn view(&self) -> RegisterView {
        let fields = Field::ALL
            .into_iter()
            .map(|field| {
                let error = self.errors.get(field);
                let value = match field {
                    Field::Email => self.email.clone(),
                    Field::Password => "*".repeat(self.password.chars().count()),
                };
                FieldView {
                    field,
                    label: field.label(),
                    required: true,
                    label_in_error: error.is_some(),
                    value,
                    error,
                }
            })
            .collect();
        RegisterView {
            heading: HEADING,
            banner: self.api_error().map(|message| format!("Error: {message}")),
            fields,
            submit_label: SUBMIT_LABEL,
        }
    }
}

fn failure_message(error: ApiError) -> String {
    match error {
        ApiError::Status { message, .. } => {
            message.unwrap_or_else(|| REGISTRATION_FAILED.to_owned())
        }
        ApiError::Transport { .. } | ApiError::Decode { .. } => UNEXPECTED_ERROR.to_owned(),
    }
}

/// One input row of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub required: bool,
    /// Label should be highlighted as erroneous.
    pub label_in_error: bool,
    /// Display value; passwords are masked.
    pub value: String,
    pub error: Option<&'static str>,
}

/// Render model of [`RegisterForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterView {
    pub heading: &'static str,
    /// API error banner, `Error: {message}`.
    pub banner: Option<String>,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
}

impl fmt::Display for RegisterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        if let Some(banner) = &self.banner {
            writeln!(f, "{banner}")?;
        }
        for row in &self.fields {
            let marker = if row.required { " *" } else { "" };
            let flag = if row.label_in_error { "! " } else { "" };
            writeln!(f, "{flag}{}{marker}: {}", row.label, row.value)?;
            if let Some(error) = row.error {
                writeln!(f, "  {error}")?;
            }
        }
        write!(f, "[{}]", self.submit_label)
    }
}
