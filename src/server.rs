use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::api_json::handlers::{
    analyze_grades_handler, calculate_gpa_handler, compare_scenarios_handler, health_handler, help_handler,
    not_found_handler, openapi_json_handler, plan_study_handler, semester_gpa_handler, swagger_ui_handler,
};
use crate::config::ServerConfig;
use crate::error::ApiError;

/// Body parsing config shared by every JSON endpoint: malformed bodies become
/// a 400 in the usual failure envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| ApiError::InvalidJson(err.to_string()).into())
}

/// Registers every route. Shared by `run_server` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_handler))
        .route("/help", web::get().to(help_handler))
        .route("/api-docs", web::get().to(swagger_ui_handler))
        .route("/openapi.json", web::get().to(openapi_json_handler))
        .service(
            web::scope("/api/planner")
                .route("/calculate-gpa", web::post().to(calculate_gpa_handler))
                .route("/plan-study", web::post().to(plan_study_handler))
                .route("/analyze-grades", web::post().to(analyze_grades_handler))
                .route("/compare-scenarios", web::post().to(compare_scenarios_handler))
                .route("/semester-gpa", web::post().to(semester_gpa_handler)),
        )
        .default_service(web::to(not_found_handler));
}

fn cors_for(origin: &str) -> Cors {
    let cors = if origin == "*" { Cors::default().allow_any_origin() } else { Cors::default().allowed_origin(origin) };
    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .supports_credentials()
        .max_age(3600)
}

pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    info!(
        bind = %config.bind,
        workers = config.workers,
        cors_origin = %config.cors_origin,
        analyzer_grades = %config.planner.analyzer_scale.name(),
        "starting planner API"
    );

    let settings = web::Data::new(config.planner);
    let origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors_for(&origin))
            .app_data(settings.clone())
            .app_data(json_config())
            .configure(configure)
    })
    .workers(config.workers)
    .bind(config.bind.as_str())?
    .run()
    .await
}
