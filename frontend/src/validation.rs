//! Field rules for the registration form.
//!
//! Two rule sets exist: the per-field table applied while typing and the
//! required-field checks applied on submit. Submit starts from the required
//! checks and consults the per-field table only once both values are present.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

pub const INVALID_EMAIL: &str = "Invalid email format";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Form fields known to the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// Every field in display order.
    pub const ALL: [Field; 2] = [Field::Email, Field::Password];

    /// Wire and form name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Look up a field by its form name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Human label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional error message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// Message currently attached to `field`.
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Set or clear the entry for `field`.
    pub fn set(&mut self, field: Field, message: Option<&'static str>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

/// Apply the per-field rule to `value`.
///
/// # Examples
/// ```
/// use signup_frontend::validation::{validate_field, INVALID_EMAIL};
/// use signup_frontend::Field;
///
/// assert_eq!(validate_field(Field::Email, "nope"), Some(INVALID_EMAIL));
/// assert_eq!(validate_field(Field::Email, "a@b.com"), None);
/// ```
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Email => (!email_regex().is_match(value)).then_some(INVALID_EMAIL),
        Field::Password => {
            (value.chars().count() < PASSWORD_MIN_CHARS).then_some(PASSWORD_TOO_SHORT)
        }
    }
}

/// Required-field checks run on submit.
pub fn required_errors(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if email.is_empty() {
        errors.set(Field::Email, Some(EMAIL_REQUIRED));
    }
    if password.is_empty() {
        errors.set(Field::Password, Some(PASSWORD_REQUIRED));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.com")]
    #[case("first.last+tag@sub.example.org")]
    #[case("x@y.z")]
    fn well_formed_emails_pass(#[case] email: &str) {
        assert_eq!(validate_field(Field::Email, email), None);
    }

    #[rstest]
    #[case("")]
    #[case("plainaddress")]
    #[case("a@b")]
    #[case("@b.com")]
    #[case("a@.com ")]
    #[case("a b@c.com")]
    #[case("a@@b.com")]
    fn malformed_emails_fail(#[case] email: &str) {
        assert_eq!(validate_field(Field::Email, email), Some(INVALID_EMAIL));
    }

    #[rstest]
    #[case("", Some(PASSWORD_TOO_SHORT))]
    #[case("1234567", Some(PASSWORD_TOO_SHORT))]
    #[case("12345678", None)]
    #[case("ééééééé", Some(PASSWORD_TOO_SHORT))]
    #[case("éééééééé", None)]
    fn password_length_counts_characters(
        #[case] password: &str,
        #[case] expected: Option<&'static str>,
    ) {
        assert_eq!(validate_field(Field::Password, password), expected);
    }

    #[rstest]
    #[case("", "", 2)]
    #[case("a@b.com", "", 1)]
    #[case("", "longenough1", 1)]
    #[case("x", "y", 0)]
    fn required_checks_only_look_for_empty_values(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: usize,
    ) {
        assert_eq!(required_errors(email, password).len(), expected);
    }

    #[rstest]
    fn required_messages_name_the_field() {
        let errors = required_errors("", "");
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
    }

    #[rstest]
    #[case("email", Some(Field::Email))]
    #[case("password", Some(Field::Password))]
    #[case("username", None)]
    #[case("Email", None)]
    fn field_names_resolve_exactly(#[case] name: &str, #[case] expected: Option<Field>) {
        assert_eq!(Field::from_name(name), expected);
    }

    #[rstest]
    fn clearing_an_entry_removes_it() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Email, Some(INVALID_EMAIL));
        errors.set(Field::Email, None);
        assert!(errors.is_empty());
    }
}
