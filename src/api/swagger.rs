use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Signup Service API",
        version = "1.0.0",
        description = "User signup backed by MongoDB. Accounts are created with `POST /signup`; emails are unique."
    ),
    paths(
        crate::api::auth::sign_up,
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::services::signup_service::SignupRequest,
            crate::services::signup_service::SignupResponse,
            crate::utils::error::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "User signup."),
        (name = "Health", description = "Service and database health."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_signup_and_health() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/signup"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
