use actix_web::{web, HttpRequest, HttpResponse};

use pa_core::repositories::UserRepository;
use pa_core::services::{CacheServiceTrait, SmsServiceTrait};
use pa_shared::ApiResponse;

use crate::dto::auth::ProfileResponse;
use crate::handlers::error::{extract_language, handle_domain_error_with_lang};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for GET /api/v1/auth/profile (guarded)
pub async fn profile<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    match state.auth_service.profile(auth.user_id).await {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(
            "Profile",
            ProfileResponse::from(profile),
        )),
        Err(error) => handle_domain_error_with_lang(&error, extract_language(&req)),
    }
}
