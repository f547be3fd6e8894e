use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use pa_core::repositories::UserRepository;
use pa_core::services::{CacheServiceTrait, SmsServiceTrait};
use pa_shared::{ApiResponse, Language};

use crate::dto::auth::{OtpSentResponse, SendOtpRequest};
use crate::handlers::error::{extract_language, handle_domain_error_with_lang, validation_error};

use super::AppState;

/// Handler for POST /api/v1/auth/send-otp
///
/// Issues a fresh code without registration data, e.g. to re-verify an
/// existing account. At most one code per phone per minute.
pub async fn send_otp<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<SendOtpRequest>,
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

    match state.auth_service.send_otp(&request.phone).await {
        Ok(result) => {
            let message = match lang {
                Language::English => "Verification code sent to your phone",
                Language::Uzbek => "Tasdiqlash kodi telefoningizga yuborildi.",
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
