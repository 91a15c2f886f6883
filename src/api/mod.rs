pub mod auth;
pub mod health;
pub mod swagger;

use crate::utils::ErrorResponse;
use actix_web::{error, web, HttpResponse};

/// Registers every route. The repository is expected as `web::Data<dyn UserRepository>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .route("/signup", web::post().to(auth::sign_up));
}

/// Malformed or incomplete bodies get the same `{"error": ...}` shape as handler errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::warn!("❌ Rejected request body: {}", message);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse { error: message }),
        )
        .into()
    })
}
