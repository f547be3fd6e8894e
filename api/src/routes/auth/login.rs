use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use pa_core::repositories::UserRepository;
use pa_core::services::{CacheServiceTrait, SmsServiceTrait};
use pa_shared::{ApiResponse, Language};

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{extract_language, handle_domain_error_with_lang, validation_error};

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// ## Errors
/// - 401 Unauthorized: Wrong password
/// - 403 Forbidden: Phone not verified
/// - 404 Not Found: No account for this phone
pub async fn login<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let lang = extract_language(&req);

    if let Err(errors) = request.validate() {
        return validation_error(&errors, lang);
    }

    match state
        .auth_service
        .login(&request.phone, &request.password)
        .await
    {
        Ok(session) => {
            let message = match lang {
                Language::English => "Logged in successfully",
                Language::Uzbek => "Muvaffaqiyatli kirdingiz",
            };
            HttpResponse::Ok().json(ApiResponse::success(
                message,
                LoginResponse {
                    token: session.token,
                    token_type: "Bearer".to_string(),
                    expires_in: session.expires_in,
                },
            ))
        }
        Err(error) => handle_domain_error_with_lang(&error, lang),
    }
}
