//! CORS configuration for browser and mobile clients.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use pa_shared::Environment;

/// Build the CORS policy for the given environment
///
/// Development allows any origin. Other environments only allow the
/// comma-separated origins in `ALLOWED_ORIGINS`.
pub fn create_cors(environment: Environment) -> Cors {
    let max_age = std::env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(max_age);

    if environment.is_development() {
        tracing::info!("Configuring CORS for development environment");
        return cors.allow_any_origin();
    }

    let origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .fold(cors, |cors, origin| {
            tracing::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}
