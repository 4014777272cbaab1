//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use signup_backend::Trace;
#[cfg(debug_assertions)]
use signup_backend::doc::ApiDoc;
use signup_backend::inbound::http::{configure, route_not_found};
use signup_backend::inbound::http::health::{HealthState, live, ready};
use signup_backend::inbound::http::state::HttpState;
use signup_backend::outbound::memory::InMemoryUserRepository;
use signup_backend::outbound::persistence::DieselUserRepository;

fn build_cors(client_origin: &str) -> Cors {
    let cors = if client_origin == "*" {
        Cors::default().allow_any_origin()
    } else {
        Cors::default().allowed_origin(client_origin)
    };
    cors.allow_any_method()
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user repository");
            HttpState::from_repository(Arc::new(DieselUserRepository::new(pool.clone())))
        }
        None => {
            info!("no database configured; using in-memory user repository");
            HttpState::from_repository(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live)
        .default_service(web::to(route_not_found));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server for the users API.
///
/// The in-memory store is shared across workers, so every worker sees the
/// same users.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig {
        bind_addr,
        client_origin,
        db_pool: _,
    } = config;

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            build_cors(&client_origin),
        )
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;

    const ORIGIN: &str = "http://localhost:5173";

    fn app_state() -> (web::Data<HealthState>, web::Data<HttpState>) {
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("literal parses"),
            ORIGIN,
        );
        (
            web::Data::new(HealthState::new()),
            web::Data::new(build_http_state(&config)),
        )
    }

    #[actix_web::test]
    async fn cors_allows_configured_origin() {
        let (health, http) = app_state();
        let app = test::init_service(build_app(health, http, build_cors(ORIGIN))).await;

        let request = test::TestRequest::get()
            .uri("/users")
            .insert_header((header::ORIGIN, ORIGIN))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some(ORIGIN)
        );
    }

    #[actix_web::test]
    async fn cors_rejects_other_origins() {
        let (health, http) = app_state();
        let app = test::init_service(build_app(health, http, build_cors(ORIGIN))).await;

        let request = test::TestRequest::get()
            .uri("/users")
            .insert_header((header::ORIGIN, "http://evil.example"))
            .to_request();
        let response = test::try_call_service(&app, request).await;

        match response {
            Ok(response) => assert!(
                response
                    .headers()
                    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .is_none()
            ),
            Err(err) => assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST),
        }
    }

    #[actix_web::test]
    async fn probes_and_users_are_routed() {
        let (health, http) = app_state();
        health.mark_ready();
        let app = test::init_service(build_app(health, http, build_cors(ORIGIN))).await;

        let ready_response = test::call_service(
            &app,
            test::TestRequest::get().uri("/health/ready").to_request(),
        )
        .await;
        assert_eq!(ready_response.status(), StatusCode::OK);

        let users =
            test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
        assert_eq!(users.status(), StatusCode::OK);
        assert!(users.headers().contains_key("trace-id"));
    }

    #[actix_web::test]
    async fn unmatched_paths_answer_with_json_not_found() {
        let (health, http) = app_state();
        let app = test::init_service(build_app(health, http, build_cors(ORIGIN))).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/nowhere").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("trace-id"));
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["message"], "no route for GET /nowhere");
    }
}
