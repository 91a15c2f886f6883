mod api;
mod config;
mod database;
mod models;
mod repositories;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::{Compress, Logger}, web, App, HttpServer};
use dotenv::dotenv;
use repositories::{MongoUserRepository, UnavailableUserRepository, UserRepository};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = config::Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting Signup Service...");
    log::info!("📊 Database: {}", config.database.name);

    // No retry: a failed connection leaves the service up but every signup fails fast
    let (db, repository) = match database::MongoDB::connect(&config.database).await {
        Ok(db) => {
            log::info!("✅ db connection established");
            let repository: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(db.clone()));
            (Some(db), repository)
        }
        Err(e) => {
            log::error!("❌ db connection error: {}", e);
            let repository: Arc<dyn UserRepository> =
                Arc::new(UnavailableUserRepository::new(e.to_string()));
            (None, repository)
        }
    };
    let repo_data = web::Data::from(repository);

    let (host, port) = config.bind_address();
    let cors_origins = config.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    let server = HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(repo_data.clone())
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
    })
    .bind((host, port))?
    .run()
    .await;

    if let Some(db) = db {
        log::info!("🔌 Closing database connection...");
        db.shutdown().await;
        log::info!("✅ Database connection closed");
    }

    server
}
