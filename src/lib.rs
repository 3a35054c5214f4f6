use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use std::sync::Arc;
use actix_cors::Cors;

pub mod config;
mod routes;
mod handlers;
pub mod models;
pub mod db;
pub mod errors;
pub mod services;
pub mod telemetry;
use crate::db::MatchRepository;
use crate::handlers::request_errors::{json_error_handler, path_error_handler};
use crate::routes::init_routes;
use crate::services::MatchService;

pub fn run(
    listener: TcpListener,
    repository: Arc<dyn MatchRepository>,
    allowed_origins: Vec<String>,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let match_service = web::Data::new(MatchService::new(repository));
    let json_config = web::JsonConfig::default().error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);

    let server = HttpServer::new( move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        let app = App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(json_config.clone())
            .app_data(path_config.clone())
            // Get a pointer copy and attach it to the application state
            .app_data(match_service.clone());

        app.configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
