//! Backend API port and its reqwest adapter.
//!
//! The adapter owns transport details only: request serialisation, timeouts
//! and status mapping. Deciding what a failure means to the user is left to
//! the components.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ClientConfig;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const REGISTER_PATH: &str = "/users/register";
const USERS_PATH: &str = "/users";

/// Failures surfaced by [`UsersApi`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `message` carries the `message` field of a JSON error body when one
    /// was present.
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// The request never produced a response.
    #[error("{message}")]
    Transport { message: String },
    /// A success response carried a body that could not be decoded.
    #[error("{message}")]
    Decode { message: String },
}

impl ApiError {
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Registration payload posted to the backend.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User as returned by the backend.
///
/// Fields beyond `id` and `email` are kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Driven port for the backend user endpoints.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Submit a registration.
    ///
    /// Any success status counts as a registration; the created user is
    /// returned when the body decodes as one.
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<Option<UserSummary>, ApiError>;

    /// Fetch every registered user.
    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError>;
}

/// [`UsersApi`] adapter speaking HTTP through reqwest.
pub struct HttpUsersApi {
    client: Client,
    config: ClientConfig,
}

impl HttpUsersApi {
    /// Build an adapter with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Build an adapter with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(config: ClientConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }

    async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<Option<UserSummary>, ApiError> {
        let url = self.config.endpoint(REGISTER_PATH);
        debug!(%url, email = %request.email, "submitting registration");
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = Self::read_body(response).await?;
        Ok(decode_created(body.as_ref()))
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        let url = self.config.endpoint(USERS_PATH);
        debug!(%url, "fetching users");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = Self::read_body(response).await?;
        decode(body.as_ref())
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|error| ApiError::decode(format!("invalid response body: {error}")))
}

/// Created user from a registration response, if the body holds one.
fn decode_created(body: &[u8]) -> Option<UserSummary> {
    decode(body)
        .inspect_err(|error| debug!(%error, "registration response carried no user"))
        .ok()
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    ApiError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    ApiError::status(status.as_u16(), error_message(body))
}

/// `message` field of a JSON error body, if any.
fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
