//! HTTP inbound adapter exposing the users REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;
pub(crate) mod validation;

use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

pub use error::ApiResult;

use crate::domain::Error;

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    Error::invalid_request(format!("malformed JSON body: {err}"))
        .with_details(json!({ "field": "body", "code": "invalid_json" }))
        .into()
}

/// Fallback for paths no route matches; answers with a JSON `not_found`.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Register the users endpoints and JSON extractor settings.
///
/// Callers provide [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use signup_backend::inbound::http::{configure, state::HttpState};
/// use signup_backend::outbound::memory::InMemoryUserRepository;
///
/// let state = HttpState::from_repository(Arc::new(InMemoryUserRepository::new()));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(users::list_users)
        .service(users::get_user)
        .service(users::register_user);
}
