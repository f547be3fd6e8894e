use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use pa_core::repositories::UserRepository;
use pa_core::services::{CacheServiceTrait, SmsServiceTrait};
use pa_shared::{ApiResponse, Language};

use crate::dto::auth::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::{extract_language, handle_domain_error_with_lang, validation_error};

use super::AppState;

/// Handler for POST /api/v1/auth/verify-otp
///
/// Consumes the code and marks the account verified, creating it from the
/// pending registration when needed.
///
/// ## Errors
/// - 400 Bad Request: Code missing, expired or wrong; registration data missing
/// - 409 Conflict: A concurrent registration created the account first
pub async fn verify_otp<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<VerifyOtpRequest>,
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
        .verify_otp(&request.phone, &request.code)
        .await
    {
        Ok(result) => {
            let message = match lang {
                Language::English => "Phone number verified successfully",
                Language::Uzbek => "Telefon raqamingiz muvaffaqiyatli tasdiqlandi",
            };
            HttpResponse::Ok().json(ApiResponse::success(
                message,
                VerifyOtpResponse {
                    user_id: result.user_id,
                },
            ))
        }
        Err(error) => handle_domain_error_with_lang(&error, lang),
    }
}
