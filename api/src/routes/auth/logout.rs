use actix_web::{web, HttpRequest, HttpResponse};

use pa_core::repositories::UserRepository;
use pa_core::services::{CacheServiceTrait, SmsServiceTrait};
use pa_shared::{ApiResponse, Language};

use crate::handlers::error::{extract_language, handle_domain_error_with_lang};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for POST /api/v1/auth/logout (guarded)
///
/// Adds the presented token to the denylist for the rest of its lifetime.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {token}
/// ```
pub async fn logout<U, S, C>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, C>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let lang = extract_language(&req);

    match state.auth_service.logout(&auth.token).await {
        Ok(_) => {
            tracing::info!(user_id = %auth.user_id, event = "logout", "Session revoked");
            let message = match lang {
                Language::English => "Logged out successfully",
                Language::Uzbek => "Siz muvaffaqiyatli logout qilindingiz",
            };
            HttpResponse::Ok().json(ApiResponse::ok(message))
        }
        Err(error) => handle_domain_error_with_lang(&error, lang),
    }
}
