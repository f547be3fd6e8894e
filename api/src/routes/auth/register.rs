use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use pa_core::repositories::UserRepository;
use pa_core::services::{CacheServiceTrait, SmsServiceTrait};
use pa_shared::phone::mask_phone_number;
use pa_shared::{ApiResponse, Language};

use crate::dto::auth::{OtpSentResponse, RegisterRequest};
use crate::handlers::error::{extract_language, handle_domain_error_with_lang, validation_error};

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Hashes the password and sends a verification code. The account is only
/// created once the code is confirmed through `/verify-otp`.
///
/// # Request Body
///
/// ```json
/// { "phone": "901234567", "firstName": "Ali", "lastName": "Valiyev", "password": "secret123" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body
/// - 409 Conflict: Phone already registered and verified
/// - 429 Too Many Requests: Code requested less than a minute ago
/// - 503 Service Unavailable: SMS delivery failed
pub async fn register<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<RegisterRequest>,
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

    tracing::info!(phone = %mask_phone_number(&request.phone), "Processing registration");

    match state
        .auth_service
        .register(
            &request.phone,
            &request.first_name,
            &request.last_name,
            &request.password,
        )
        .await
    {
        Ok(result) => {
            let message = match lang {
                Language::English => "Verification code sent",
                Language::Uzbek => "Tasdiqlash kodi yuborildi",
            };
            HttpResponse::Ok().json(ApiResponse::success(
                message,
                OtpSentResponse {
                    phone: result.phone,
                    expires_in: result.expires_in,
                },
            ))
        }
        Err(error) => handle_domain_error_with_lang(&error, lang),
    }
}
