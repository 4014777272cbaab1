//! Request validation for inbound HTTP adapters.
//!
//! Each endpoint validates its input explicitly and reports the first failure
//! as `invalid_request` with `{field, code}` details.

use serde_json::{Map, Value, json};

use crate::domain::{Email, Error, NewUser, Password, UserAttributes, UserId, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidType,
    ReservedField,
    InvalidId,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidType => "invalid_type",
            Self::ReservedField => "reserved_field",
            Self::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const BODY: FieldName = FieldName::new("body");
pub(crate) const EMAIL: FieldName = FieldName::new("email");
pub(crate) const PASSWORD: FieldName = FieldName::new("password");
pub(crate) const ID: FieldName = FieldName::new("id");

fn validation_error(field: &str, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    validation_error(
        name,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn invalid_type_error(field: FieldName, expected: &str) -> Error {
    let name = field.as_str();
    validation_error(
        name,
        ValidationCode::InvalidType,
        format!("{name} must be {expected}"),
    )
}

fn required_string(fields: &mut Map<String, Value>, field: FieldName) -> Result<String, Error> {
    match fields.remove(field.as_str()) {
        None => Err(missing_field_error(field)),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(invalid_type_error(field, "a string")),
    }
}

/// Validate a registration payload into domain input.
///
/// `email` and `password` must be present and be strings. Every other field is
/// carried as a user attribute except `id`, which the store assigns.
pub(crate) fn parse_registration(body: Value) -> Result<NewUser, Error> {
    let Value::Object(mut fields) = body else {
        return Err(invalid_type_error(BODY, "a JSON object"));
    };

    let email = required_string(&mut fields, EMAIL)?;
    let password = required_string(&mut fields, PASSWORD)?;
    let attributes = UserAttributes::new(fields).map_err(|err| match err {
        UserValidationError::ReservedAttribute { name } => validation_error(
            &name,
            ValidationCode::ReservedField,
            format!("{name} is assigned by the server"),
        ),
        other => Error::invalid_request(other.to_string()),
    })?;

    Ok(NewUser::new(Email::new(email), Password::new(password)).with_attributes(attributes))
}

/// Parse a path segment into a user id.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<i32>()
        .ok()
        .and_then(|id| UserId::new(id).ok())
        .ok_or_else(|| {
            validation_error(
                ID.as_str(),
                ValidationCode::InvalidId,
                format!("id must be a positive integer, got {raw:?}"),
            )
        })
}
