use actix_web::{web, HttpResponse};
use crate::repositories::UserRepository;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are healthy", body = HealthResponse),
        (status = 503, description = "Database is unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(repo: web::Data<dyn UserRepository>) -> HttpResponse {
    let (status, database, mut builder) = match repo.ping().await {
        Ok(()) => ("healthy", "connected", HttpResponse::Ok()),
        Err(e) => {
            log::warn!("⚠️ Health check: database ping failed - {}", e);
            ("degraded", "unavailable", HttpResponse::ServiceUnavailable())
        }
    };

    builder.json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        database: database.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::repositories::memory::InMemoryUserRepository;
    use crate::repositories::UnavailableUserRepository;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    async fn get_health(repo: Arc<dyn UserRepository>) -> (StatusCode, HealthResponse) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(repo))
                .configure(api::configure),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_health_reports_connected_database() {
        let (status, body) = get_health(Arc::new(InMemoryUserRepository::new())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.database, "connected");
        assert_eq!(body.service, "signup-service");
    }

    #[actix_web::test]
    async fn test_health_reports_unavailable_database() {
        let (status, body) =
            get_health(Arc::new(UnavailableUserRepository::new("refused"))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.database, "unavailable");
    }
}
