use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use pa_core::repositories::UserRepository;
use pa_core::services::{CacheServiceTrait, SmsServiceTrait};
use pa_shared::{ApiResponse, Language};

use crate::dto::auth::{ProfileResponse, UpdateProfileRequest};
use crate::handlers::error::{extract_language, handle_domain_error_with_lang, validation_error};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for POST /api/v1/auth/update (guarded)
///
/// Omitted names are left unchanged.
pub async fn update<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
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

    let request = request.into_inner();
    match state
        .auth_service
        .update_profile(auth.user_id, request.first_name, request.last_name)
        .await
    {
        Ok(profile) => {
            let message = match lang {
                Language::English => "Profile updated successfully",
                Language::Uzbek => "Profil muvaffaqiyatli yangilandi",
            };
            HttpResponse::Ok().json(ApiResponse::success(message, ProfileResponse::from(profile)))
        }
        Err(error) => handle_domain_error_with_lang(&error, lang),
    }
}
