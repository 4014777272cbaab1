//! Users API handlers.
//!
//! ```text
//! GET  /users
//! GET  /users/{id}
//! POST /users/register {"email":"a@b.com","password":"longenough1"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde_json::Value;
use tracing::debug;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_registration, parse_user_id};

/// List every registered user in store order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use signup_backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [crate::inbound::http::schemas::UserSchema]),
        (status = 503, description = "Service unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    debug!(count = users.len(), "listed users");
    Ok(web::Json(users))
}

/// Fetch one user by id; a miss yields `null` rather than 404.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User, or null when absent", body = Option<crate::inbound::http::schemas::UserSchema>),
        (status = 400, description = "Invalid id", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Service unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<User>>> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(user))
}

/// Register a new user.
///
/// Extra payload fields are stored with the user and returned alongside `id`
/// and `email`.
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = crate::inbound::http::schemas::RegisterUserSchema,
    responses(
        (status = 201, description = "Created user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 409, description = "Email already registered", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Service unavailable", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/users/register")]
pub async fn register_user(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let new_user = parse_registration(payload.into_inner())?;
    let user = state.registration.register(new_user).await?;
    Ok(HttpResponse::Created().json(user))
}

#[cfg(test)]
mod tests;
