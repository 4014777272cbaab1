//! Test doubles shared by the component tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Map;

use crate::api::{ApiError, RegisterRequest, UserSummary, UsersApi};

pub(crate) fn user(id: i32, email: &str) -> UserSummary {
    UserSummary {
        id,
        email: email.to_owned(),
        extra: Map::new(),
    }
}

/// [`UsersApi`] returning canned results and counting calls.
pub(crate) struct StubUsersApi {
    register_result: Result<Option<UserSummary>, ApiError>,
    list_result: Result<Vec<UserSummary>, ApiError>,
    register_calls: AtomicUsize,
    list_calls: AtomicUsize,
    last_request: Mutex<Option<RegisterRequest>>,
}

impl StubUsersApi {
    pub(crate) fn new() -> Self {
        Self {
            register_result: Ok(Some(user(1, "a@b.com"))),
            list_result: Ok(Vec::new()),
            register_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub(crate) fn registering(mut self, result: Result<Option<UserSummary>, ApiError>) -> Self {
        self.register_result = result;
        self
    }

    pub(crate) fn listing(mut self, result: Result<Vec<UserSummary>, ApiError>) -> Self {
        self.list_result = result;
        self
    }

    pub(crate) fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<RegisterRequest> {
        self.last_request.lock().expect("stub lock").clone()
    }
}

#[async_trait]
impl UsersApi for StubUsersApi {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<Option<UserSummary>, ApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().expect("stub lock") = Some(request.clone());
        self.register_result.clone()
    }

    async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_result.clone()
    }
}
