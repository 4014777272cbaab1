//! Tests for users API handlers.
//!
//! Each app runs against a fresh in-memory repository behind the real
//! account service.

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::{MockUserRegistration, MockUsersQuery};
use crate::domain::{Error, TRACE_ID_HEADER, USER_EXISTS_MESSAGE};
use crate::inbound::http::configure;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryUserRepository;

async fn memory_app() -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    let state = HttpState::from_repository(Arc::new(InMemoryUserRepository::new()));
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

async fn register(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    body: Value,
) -> (StatusCode, Value) {
    let request = actix_test::TestRequest::post()
        .uri("/users/register")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    (status, actix_test::read_body_json(response).await)
}

async fn get_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> (StatusCode, Value) {
    let response =
        actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    let status = response.status();
    (status, actix_test::read_body_json(response).await)
}

#[rstest]
#[actix_web::test]
async fn register_returns_created_user_without_password() {
    let app = memory_app().await;

    let (status, body) = register(
        &app,
        json!({ "email": "a@b.com", "password": "longenough1" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 1, "email": "a@b.com" }));
}

#[rstest]
#[actix_web::test]
async fn duplicate_registration_conflicts_and_stores_nothing() {
    let app = memory_app().await;
    let payload = json!({ "email": "a@b.com", "password": "longenough1" });
    register(&app, payload.clone()).await;

    let (status, body) = register(&app, payload).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], json!("conflict"));
    assert_eq!(body["message"], json!(USER_EXISTS_MESSAGE));
    let (_, users) = get_json(&app, "/users").await;
    assert_eq!(users.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[case(1)]
#[case(3)]
#[actix_web::test]
async fn listing_returns_every_registered_user(#[case] count: usize) {
    let app = memory_app().await;
    for n in 0..count {
        let (status, _) = register(
            &app,
            json!({ "email": format!("user{n}@b.com"), "password": "longenough1" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get_json(&app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("array body");
    assert_eq!(users.len(), count);
    let ids: HashSet<i64> = users.iter().filter_map(|user| user["id"].as_i64()).collect();
    assert_eq!(ids.len(), count);
}

#[rstest]
#[actix_web::test]
async fn extra_fields_round_trip_through_listing() {
    let app = memory_app().await;
    register(
        &app,
        json!({ "email": "a@b.com", "password": "longenough1", "name": "Ada" }),
    )
    .await;

    let (_, body) = get_json(&app, "/users").await;

    assert_eq!(body, json!([{ "id": 1, "email": "a@b.com", "name": "Ada" }]));
}

#[rstest]
#[actix_web::test]
async fn lookup_returns_user_or_null() {
    let app = memory_app().await;
    register(&app, json!({ "email": "a@b.com", "password": "longenough1" })).await;

    let (hit_status, hit) = get_json(&app, "/users/1").await;
    let (miss_status, miss) = get_json(&app, "/users/42").await;

    assert_eq!(hit_status, StatusCode::OK);
    assert_eq!(hit["email"], json!("a@b.com"));
    assert_eq!(miss_status, StatusCode::OK);
    assert_eq!(miss, Value::Null);
}

#[rstest]
#[actix_web::test]
async fn lookup_rejects_non_numeric_id() {
    let app = memory_app().await;

    let (status, body) = get_json(&app, "/users/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], json!({ "field": "id", "code": "invalid_id" }));
}

#[rstest]
#[case(json!({ "password": "longenough1" }), "email", "missing_field")]
#[case(json!({ "email": true, "password": "longenough1" }), "email", "invalid_type")]
#[case(json!("a@b.com"), "body", "invalid_type")]
#[actix_web::test]
async fn register_validates_payload(
    #[case] payload: Value,
    #[case] field: &str,
    #[case] code: &str,
) {
    let app = memory_app().await;

    let (status, body) = register(&app, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["details"], json!({ "field": field, "code": code }));
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_an_invalid_request() {
    let app = memory_app().await;
    let request = actix_test::TestRequest::post()
        .uri("/users/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"], json!({ "field": "body", "code": "invalid_json" }));
}

#[rstest]
#[actix_web::test]
async fn store_outage_maps_to_service_unavailable_with_trace_header() {
    let mut users = MockUsersQuery::new();
    users
        .expect_list_users()
        .times(1)
        .returning(|| Err(Error::service_unavailable("user repository unavailable")));
    let state = HttpState::new(Arc::new(users), Arc::new(MockUserRegistration::new()));
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure),
    )
    .await;

    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/users").to_request())
            .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace id header");
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["traceId"].as_str(), Some(header.as_str()));
}
