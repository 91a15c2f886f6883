use actix_web::{web, HttpResponse, ResponseError};
use crate::repositories::UserRepository;
use crate::services::signup_service::{self, SignupRequest, SignupResponse};
use crate::utils::ErrorResponse;

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User created", body = SignupResponse),
        (status = 400, description = "User already exists, invalid payload or database error", body = ErrorResponse),
        (status = 503, description = "Database connection was not established at startup", body = ErrorResponse)
    )
)]
pub async fn sign_up(
    repo: web::Data<dyn UserRepository>,
    request: web::Json<SignupRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!("📝 POST /signup - {:?}", request);
    let email = request.email.clone();

    match signup_service::sign_up(repo.get_ref(), request).await {
        Ok(response) => {
            log::info!("✅ Signup successful: {}", email);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Signup failed: {} - {}", email, e);
            e.error_response()
        }
    }
}
