mod analysis;
mod capture;
mod config;
mod imaging;
mod inference;
mod prompt;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use analysis::analysis_service::AnalysisService;
use aws_config::BehaviorVersion;
use config::AppConfig;
use inference::bedrock_service::BedrockService;
use routes::configure_routes;
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(std::io::Error::other(format!(
                "Configuration error: {}",
                e
            )));
        }
    };

    // Region and credentials come from the default AWS provider chain
    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    match aws_config.region() {
        Some(region) => log::info!("Using AWS region {}", region),
        None => log::warn!("No AWS region configured; model calls will fail until one is set"),
    }

    let bedrock = BedrockService::from_sdk_config(&aws_config, config.model_id.clone());
    let analysis_service = AnalysisService::new(Arc::new(bedrock));

    log::info!("Model: {}", config.model_id);
    log::info!("Serving frontend from {}", config.frontend_dir);
    log::info!("Starting server on {}", config.bind_address());

    let bind_address = config.bind_address();
    let frontend_dir = config.frontend_dir.clone();
    let app_config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(analysis_service.clone()))
            .app_data(app_config.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
