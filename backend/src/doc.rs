//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users and health endpoints plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it at
//! `/docs` in debug builds and `openapi-dump` prints it for tooling.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, RegisterUserSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup backend API",
        description = "User registration, listing and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::register_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, RegisterUserSchema, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Registration and user lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const USER_SCHEMA_NAME: &str = "crate.domain.User";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn user_schema_exposes_id_and_email() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get(USER_SCHEMA_NAME).expect("User schema");

        assert_object_schema_has_field(user_schema, "id");
        assert_object_schema_has_field(user_schema, "email");
    }

    #[test]
    fn all_user_routes_are_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/users", "/users/{id}", "/users/register"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }
}
