mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::services::{MongoUserService, UserService};

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::ACCEPT,
        ])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env().context("invalid configuration")?;

    log::info!("🚀 Starting User CRUD Service...");

    let db = database::MongoDB::new(&config.database_url, &config.database_name)
        .await
        .context("failed to connect to MongoDB")?;
    log::info!("✅ MongoDB connected successfully");

    db.ensure_indexes(&config.users_collection).await;

    let user_service: Arc<dyn UserService> =
        Arc::new(MongoUserService::new(&db, &config.users_collection));
    let service_data = web::Data::from(user_service);
    let db_data = web::Data::new(db.clone());
    let config_data = web::Data::new(config.clone());

    let bind_address = config.bind_address();
    log::info!("🌐 Server starting on {}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    HttpServer::new(move || {
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(service_data.clone())
            .app_data(db_data.clone())
            .app_data(config_data.clone())
            .app_data(api::json_config())
            .wrap(build_cors(&config_data.cors_allowed_origins))
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            .route("/health", web::get().to(api::health::health_check))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            .service(web::scope("/v1").configure(api::users::configure))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?
    .run()
    .await?;

    log::info!("🛑 Server stopped, closing MongoDB client");
    db.shutdown().await;

    Ok(())
}
