//! User data model.
//!
//! A user is created once by registration and only ever read afterwards. The
//! identifier is assigned by the store; everything else is kept exactly as the
//! client supplied it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifiers are assigned by a serial column and are always positive.
    #[error("user id must be a positive integer")]
    NonPositiveId,
    /// Extra attributes may not shadow the fixed user fields.
    #[error("attribute `{name}` is reserved")]
    ReservedAttribute { name: String },
}

/// Store-assigned numeric user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UserId(i32);

impl UserId {
    /// Validate and wrap a raw identifier.
    pub fn new(id: i32) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    /// Raw identifier as stored.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i32> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address used as the unique registration key.
///
/// Matching is exact: no case folding or trimming is applied, so `A@b.com`
/// and `a@b.com` are distinct accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Wrap an address as provided.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Password stored exactly as supplied.
///
/// `Debug` output is redacted so the value never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wrap a password as provided.
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Expose the raw value for persistence.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Field names owned by the user record itself.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "email", "password"];

/// Additional registration fields kept verbatim alongside the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserAttributes(Map<String, Value>);

impl UserAttributes {
    /// Build attributes, rejecting keys that collide with user fields.
    pub fn new(fields: Map<String, Value>) -> Result<Self, UserValidationError> {
        if let Some(name) = fields.keys().find(|key| RESERVED_FIELDS.contains(&key.as_str())) {
            return Err(UserValidationError::ReservedAttribute { name: name.clone() });
        }
        Ok(Self(fields))
    }

    /// Whether no extra fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into a JSON value for storage.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// Registration input: everything needed to create a user except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: Email,
    pub password: Password,
    pub attributes: UserAttributes,
}

impl NewUser {
    /// Registration input with no extra attributes.
    pub fn new(email: Email, password: Password) -> Self {
        Self {
            email,
            password,
            attributes: UserAttributes::default(),
        }
    }

    /// Attach extra attributes.
    pub fn with_attributes(mut self, attributes: UserAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Application user.
///
/// Serialises as `{"id": .., "email": .., ...attributes}`; the password never
/// appears in the wire form.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    email: Email,
    password: Password,
    attributes: UserAttributes,
}

impl User {
    /// Assemble a user from a persisted record.
    pub fn new(id: UserId, email: Email, password: Password, attributes: UserAttributes) -> Self {
        Self {
            id,
            email,
            password,
            attributes,
        }
    }

    /// Materialise a freshly inserted user from its input and assigned id.
    pub fn from_new(id: UserId, new_user: NewUser) -> Self {
        let NewUser {
            email,
            password,
            attributes,
        } = new_user;
        Self::new(id, email, password, attributes)
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password as supplied at registration.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Extra registration attributes.
    pub fn attributes(&self) -> &UserAttributes {
        &self.attributes
    }
}

#[derive(Serialize)]
struct UserDto<'a> {
    id: i32,
    email: &'a str,
    #[serde(flatten)]
    attributes: &'a Map<String, Value>,
}

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        UserDto {
            id: self.id.get(),
            email: self.email.as_ref(),
            attributes: self.attributes.as_map(),
        }
        .serialize(serializer)
    }
}
