//! Application factory
//!
//! Wires the route handlers, session guard, CORS and request tracing into an
//! Actix-web application. Used by both the binary and the integration tests.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use pa_core::repositories::UserRepository;
use pa_core::services::{Authorizer, CacheServiceTrait, SmsServiceTrait};
use pa_shared::{error_codes, Environment, ErrorResponse};

use crate::handlers::error::malformed_body;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{
    login::login, logout::logout, profile::profile, register::register, send_otp::send_otp,
    update::update, verify_otp::verify_otp, AppState,
};

/// Create and configure the application with all dependencies
pub fn create_app<U, S, C>(
    app_state: web::Data<AppState<U, S, C>>,
    authorizer: Arc<dyn Authorizer>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(malformed_body(&err.to_string()));
            InternalError::from_response(err, response).into()
        });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // The last wrap runs first, so CORS sees requests before tracing
        .wrap(TracingLogger::default())
        .wrap(create_cors(environment))
        .route("/health", web::get().to(health_check::<U, S, C>))
        .service(
            web::scope("/api/v1/auth")
                .route("/register", web::post().to(register::<U, S, C>))
                .route("/send-otp", web::post().to(send_otp::<U, S, C>))
                .route("/verify-otp", web::post().to(verify_otp::<U, S, C>))
                .route("/login", web::post().to(login::<U, S, C>))
                .service(
                    web::resource("/profile")
                        .wrap(JwtAuth::new(authorizer.clone()))
                        .route(web::get().to(profile::<U, S, C>)),
                )
                .service(
                    web::resource("/update")
                        .wrap(JwtAuth::new(authorizer.clone()))
                        .route(web::post().to(update::<U, S, C>)),
                )
                .service(
                    web::resource("/logout")
                        .wrap(JwtAuth::new(authorizer))
                        .route(web::post().to(logout::<U, S, C>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Reports each backing service and answers 503 when any of them is down.
async fn health_check<U, S, C>(state: web::Data<AppState<U, S, C>>) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let mut checks = serde_json::Map::new();
    for check in &state.health_checks {
        checks.insert(check.name().to_string(), check.is_healthy().await.into());
    }
    let healthy = checks.values().all(|up| up.as_bool().unwrap_or(false));

    let body = serde_json::json!({
        "status": if healthy { "healthy" } else { "degraded" },
        "service": "phoneauth-api",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": checks,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        tracing::warn!(checks = %body["checks"], "Health check failed");
        HttpResponse::ServiceUnavailable().json(body)
    }
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
